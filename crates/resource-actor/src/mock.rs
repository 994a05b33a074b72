//! # Mock Stores & Testing Guide
//!
//! Code that sits *in front of* a store (adapters, orchestration) is easiest to test against a
//! scripted client instead of a running actor.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted replies, in order | Real map semantics |
//! | **Error Injection** | `return_err(...)` | Needs a state that fails |
//! | **Payload Inspection** | Use [`create_mock_client`] + `expect_*` helpers | Read the store afterwards |
//!
//! ## Fluent expectations
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorEntity, ResourceError};
//!
//! #[derive(Clone, Debug, PartialEq)] struct Item { id: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("item error")] struct ItemError;
//!
//! impl ActorEntity for Item {
//!     type Id = u32; type Create = (); type Update = (); type Action = ();
//!     type ActionResult = (); type Error = ItemError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: ()) -> Result<Self, ItemError> { Ok(Self { id }) }
//!     fn on_update(&mut self, _: ()) -> Result<(), ItemError> { Ok(()) }
//!     fn handle_action(&mut self, _: ()) -> Result<(), ItemError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Item>::new();
//!     mock.expect_get(1).return_ok(Some(Item { id: 1 }));
//!     mock.expect_get_many().return_err(ResourceError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap(), Some(Item { id: 1 }));
//!     assert!(matches!(client.get_many(vec![1]).await, Err(ResourceError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed strictly in the order they were registered. A request that does
//! not match the next expectation makes the mock task panic, which the caller observes as
//! [`ResourceError::ActorDropped`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::ResourceError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, ResourceError>,
    },
    GetMany {
        response: Result<Vec<T>, ResourceError>,
    },
    Create {
        response: Result<T, ResourceError>,
    },
    UpdateMany {
        response: Result<Vec<T>, ResourceError>,
    },
    Action {
        response: Result<T::ActionResult, ResourceError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let scripted = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = scripted
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::GetMany { respond_to, .. },
                        Some(Expectation::GetMany { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::UpdateMany { respond_to, .. },
                        Some(Expectation::UpdateMany { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation. The id is documentation only; replies are matched by order.
    pub fn expect_get(&mut self, _id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(|response| Expectation::Get { response })
    }

    /// Expects a `get_many` operation.
    pub fn expect_get_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::GetMany { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `update_many` operation.
    pub fn expect_update_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::UpdateMany { response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, _id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(|response| Expectation::Action { response })
    }

    /// Panics unless every registered expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectations poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<R>(
        &self,
        wrap: fn(Result<R, ResourceError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }
}

/// Registers the reply for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    wrap: fn(Result<R, ResourceError>) -> Expectation<T>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ResourceError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, ResourceError>) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when the test needs to look at request payloads (e.g., the exact batch sent to
/// `update_many`) and answer them by hand.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a GetMany.
pub async fn expect_get_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<T::Id>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an UpdateMany.
pub async fn expect_update_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<(T::Id, T::Update)>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::UpdateMany {
            updates,
            respond_to,
        }) => Some((updates, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Sku {
        id: u32,
        code: String,
    }

    #[derive(Debug)]
    struct SkuCreate {
        code: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Sku error")]
    struct SkuError;

    impl ActorEntity for Sku {
        type Id = u32;
        type Create = SkuCreate;
        type Update = String;
        type Action = ();
        type ActionResult = ();
        type Error = SkuError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: SkuCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                code: params.code,
            })
        }

        fn on_update(&mut self, code: String) -> Result<(), Self::Error> {
            self.code = code;
            Ok(())
        }

        fn handle_action(&mut self, _action: ()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn sku(id: u32, code: &str) -> Sku {
        Sku {
            id,
            code: code.to_string(),
        }
    }

    #[tokio::test]
    async fn test_receiver_helpers_expose_payloads() {
        let (client, mut receiver) = create_mock_client::<Sku>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(SkuCreate {
                    code: "A-1".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.code, "A-1");
        responder.send(Ok(sku(1, "A-1"))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created, sku(1, "A-1"));
    }

    #[tokio::test]
    async fn test_update_many_payload_is_forwarded_verbatim() {
        let (client, mut receiver) = create_mock_client::<Sku>(10);

        let task = tokio::spawn(async move {
            client
                .update_many(vec![(1, "X".to_string()), (2, "Y".to_string())])
                .await
        });

        let (updates, responder) = expect_update_many(&mut receiver)
            .await
            .expect("Expected UpdateMany request");
        assert_eq!(updates, vec![(1, "X".to_string()), (2, "Y".to_string())]);
        responder.send(Ok(vec![sku(1, "X"), sku(2, "Y")])).unwrap();

        assert_eq!(task.await.unwrap().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Sku>::new();

        mock.expect_create().return_ok(sku(1, "A-1"));
        mock.expect_get(1).return_ok(Some(sku(1, "A-1")));
        mock.expect_get_many().return_ok(vec![]);

        let client = mock.client();

        let created = client
            .create(SkuCreate {
                code: "A-1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().code, "A-1");

        assert!(client.get_many(vec![5]).await.unwrap().is_empty());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_surfaces_as_dropped() {
        let mut mock = MockClient::<Sku>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().list().await;
        assert!(matches!(result, Err(ResourceError::ActorDropped)));
    }
}
