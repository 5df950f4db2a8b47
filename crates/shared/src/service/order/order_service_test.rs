use super::{OrderService, OrderServiceDeps};
use crate::abstract_trait::{
    KeyCommandRepositoryTrait, KeyQueryRepositoryTrait, OrderCommandRepositoryTrait,
    OrderQueryRepositoryTrait, ProductQueryRepositoryTrait,
};
use crate::domain::requests::{
    AssignKeysRequest, CreateOrderRequest, FindAllKeys, FindAllOrders, FindAllProducts,
    SubmitPaymentRequest,
};
use crate::errors::{RepositoryError, ServiceError};
use crate::model::{Order, OrderStatus, Product, ProductKey};
use async_trait::async_trait;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI32, Ordering},
};

#[derive(Default)]
struct Store {
    products: Mutex<Vec<Product>>,
    orders: Mutex<Vec<Order>>,
    keys: Mutex<Vec<ProductKey>>,
    next_order_id: AtomicI32,
    next_key_id: AtomicI32,
}

impl Store {
    fn with_product(stock: i32) -> Arc<Self> {
        let store = Arc::new(Store {
            next_order_id: AtomicI32::new(1),
            next_key_id: AtomicI32::new(1),
            ..Default::default()
        });
        store.products.lock().unwrap().push(Product {
            product_id: 1,
            name: "Windows 11 Pro Key".to_string(),
            description: None,
            price: 1599,
            stock,
            logo: Some("💻".to_string()),
            instructions: None,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        });
        store
    }

    fn seed_keys(&self, product_id: i32, count: usize) {
        let mut keys = self.keys.lock().unwrap();
        for i in 0..count {
            let id = self.next_key_id.fetch_add(1, Ordering::SeqCst);
            keys.push(ProductKey {
                key_id: id,
                product_id,
                key_value: format!("KEY-{id}-{i}"),
                is_assigned: false,
                assigned_order_id: None,
                revoked_at: None,
                created_at: None,
                updated_at: None,
            });
        }
    }
}

struct MockProductQuery(Arc<Store>);

#[async_trait]
impl ProductQueryRepositoryTrait for MockProductQuery {
    async fn find_active(
        &self,
        _req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let products = self.0.products.lock().unwrap().clone();
        let total = products.len() as i64;
        Ok((products, total))
    }

    async fn find_trashed(
        &self,
        _req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        Ok((vec![], 0))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .0
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.product_id == id)
            .cloned())
    }
}

struct MockOrderRepo(Arc<Store>);

#[async_trait]
impl OrderQueryRepositoryTrait for MockOrderRepo {
    async fn find_all(&self, _req: &FindAllOrders) -> Result<(Vec<Order>, i64), RepositoryError> {
        let orders = self.0.orders.lock().unwrap().clone();
        let total = orders.len() as i64;
        Ok((orders, total))
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError> {
        Ok(self
            .0
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        Ok(self
            .0
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.order_id == id)
            .cloned())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MockOrderRepo {
    async fn create_order(
        &self,
        user_id: i32,
        product: &Product,
        quantity: i32,
    ) -> Result<Order, RepositoryError> {
        {
            let mut products = self.0.products.lock().unwrap();
            let stored = products
                .iter_mut()
                .find(|p| p.product_id == product.product_id)
                .ok_or(RepositoryError::NotFound)?;
            if stored.stock < quantity {
                return Err(RepositoryError::Conflict(format!(
                    "Product {} does not have {} units in stock",
                    product.product_id, quantity
                )));
            }
            stored.stock -= quantity;
        }

        let order = Order {
            order_id: self.0.next_order_id.fetch_add(1, Ordering::SeqCst),
            user_id,
            product_id: product.product_id,
            product_name: product.name.clone(),
            price: product.price * quantity as i64,
            quantity,
            status: OrderStatus::Pending.as_str().to_string(),
            payment_method: None,
            payment_trx_id: None,
            payment_sender: None,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        };
        self.0.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn submit_payment(
        &self,
        order_id: i32,
        req: &SubmitPaymentRequest,
    ) -> Result<Order, RepositoryError> {
        let mut orders = self.0.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.order_id == order_id)
            .ok_or(RepositoryError::NotFound)?;

        if order.status != OrderStatus::Pending.as_str() {
            return Err(RepositoryError::Conflict(format!(
                "Order {order_id} is {}, payment can only be submitted while pending",
                order.status
            )));
        }

        order.payment_method = Some(req.method.clone());
        order.payment_trx_id = Some(req.trx_id.clone());
        order.payment_sender = Some(req.sender.clone());
        order.status = OrderStatus::AwaitingConfirmation.as_str().to_string();
        Ok(order.clone())
    }

    async fn transition_status(
        &self,
        order_id: i32,
        allowed_from: &[OrderStatus],
        to: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut orders = self.0.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.order_id == order_id)
            .ok_or(RepositoryError::NotFound)?;

        if !allowed_from.iter().any(|s| s.as_str() == order.status) {
            return Err(RepositoryError::Conflict(format!(
                "Order {order_id} is {}, cannot move to {to}",
                order.status
            )));
        }

        order.status = to.as_str().to_string();
        Ok(order.clone())
    }
}

struct MockKeyRepo(Arc<Store>);

#[async_trait]
impl KeyQueryRepositoryTrait for MockKeyRepo {
    async fn find_all(
        &self,
        _req: &FindAllKeys,
    ) -> Result<(Vec<ProductKey>, i64), RepositoryError> {
        let keys = self.0.keys.lock().unwrap().clone();
        let total = keys.len() as i64;
        Ok((keys, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductKey>, RepositoryError> {
        Ok(self
            .0
            .keys
            .lock()
            .unwrap()
            .iter()
            .find(|k| k.key_id == id)
            .cloned())
    }

    async fn find_by_order(&self, order_id: i32) -> Result<Vec<ProductKey>, RepositoryError> {
        Ok(self
            .0
            .keys
            .lock()
            .unwrap()
            .iter()
            .filter(|k| k.assigned_order_id == Some(order_id) && k.revoked_at.is_none())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl KeyCommandRepositoryTrait for MockKeyRepo {
    async fn insert_keys(
        &self,
        product_id: i32,
        values: &[String],
    ) -> Result<Vec<ProductKey>, RepositoryError> {
        let mut keys = self.0.keys.lock().unwrap();
        let mut inserted = Vec::new();
        for value in values {
            let id = self.0.next_key_id.fetch_add(1, Ordering::SeqCst);
            let key = ProductKey {
                key_id: id,
                product_id,
                key_value: value.clone(),
                is_assigned: false,
                assigned_order_id: None,
                revoked_at: None,
                created_at: None,
                updated_at: None,
            };
            keys.push(key.clone());
            inserted.push(key);
        }
        Ok(inserted)
    }

    async fn assign_to_order(
        &self,
        order_id: i32,
        product_id: i32,
        count: i32,
    ) -> Result<Vec<ProductKey>, RepositoryError> {
        let mut keys = self.0.keys.lock().unwrap();

        let available: Vec<usize> = keys
            .iter()
            .enumerate()
            .filter(|(_, k)| {
                k.product_id == product_id && !k.is_assigned && k.revoked_at.is_none()
            })
            .map(|(i, _)| i)
            .take(count as usize)
            .collect();

        if (available.len() as i32) < count {
            return Err(RepositoryError::Conflict(format!(
                "Product {product_id} has only {} unassigned keys, {count} requested",
                available.len()
            )));
        }

        let mut assigned = Vec::new();
        for idx in available {
            keys[idx].is_assigned = true;
            keys[idx].assigned_order_id = Some(order_id);
            assigned.push(keys[idx].clone());
        }
        Ok(assigned)
    }

    async fn revoke_key(&self, key_id: i32) -> Result<ProductKey, RepositoryError> {
        let mut keys = self.0.keys.lock().unwrap();
        let key = keys
            .iter_mut()
            .find(|k| k.key_id == key_id && k.revoked_at.is_none())
            .ok_or(RepositoryError::NotFound)?;
        key.revoked_at = Some(chrono::Utc::now().naive_utc());
        key.is_assigned = false;
        key.assigned_order_id = None;
        Ok(key.clone())
    }
}

fn service_over(store: &Arc<Store>) -> OrderService {
    let order_repo = Arc::new(MockOrderRepo(store.clone()));
    let key_repo = Arc::new(MockKeyRepo(store.clone()));

    OrderService::new(OrderServiceDeps {
        order_query: order_repo.clone(),
        order_command: order_repo,
        product_query: Arc::new(MockProductQuery(store.clone())),
        key_query: key_repo.clone(),
        key_command: key_repo,
    })
}

fn payment() -> SubmitPaymentRequest {
    SubmitPaymentRequest {
        method: "Bkash".to_string(),
        trx_id: "TRX123".to_string(),
        sender: "017XXXXXXXX".to_string(),
    }
}

#[tokio::test]
async fn placing_an_order_reserves_stock() {
    let store = Store::with_product(2);
    let service = service_over(&store);

    let response = service
        .command
        .create_order(
            10,
            &CreateOrderRequest {
                product_id: 1,
                quantity: 1,
            },
        )
        .await
        .expect("order");

    assert_eq!(response.data.status, "pending");
    assert_eq!(response.data.price, 1599);
    assert_eq!(store.products.lock().unwrap()[0].stock, 1);
}

#[tokio::test]
async fn insufficient_stock_is_a_conflict() {
    let store = Store::with_product(1);
    let service = service_over(&store);

    let result = service
        .command
        .create_order(
            10,
            &CreateOrderRequest {
                product_id: 1,
                quantity: 3,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Repo(RepositoryError::Conflict(_)))
    ));
}

#[tokio::test]
async fn only_the_owner_may_submit_payment() {
    let store = Store::with_product(5);
    let service = service_over(&store);

    let order = service
        .command
        .create_order(
            10,
            &CreateOrderRequest {
                product_id: 1,
                quantity: 1,
            },
        )
        .await
        .expect("order");

    let result = service
        .command
        .submit_payment(order.data.id, 99, &payment())
        .await;

    assert!(matches!(result, Err(ServiceError::Forbidden(_))));
}

#[tokio::test]
async fn full_lifecycle_assigns_keys_on_confirmation() {
    let store = Store::with_product(5);
    store.seed_keys(1, 3);
    let service = service_over(&store);

    let order = service
        .command
        .create_order(
            10,
            &CreateOrderRequest {
                product_id: 1,
                quantity: 2,
            },
        )
        .await
        .expect("order");

    let awaiting = service
        .command
        .submit_payment(order.data.id, 10, &payment())
        .await
        .expect("payment");
    assert_eq!(awaiting.data.status, "awaiting_confirmation");

    let paid = service
        .command
        .confirm_payment(order.data.id)
        .await
        .expect("confirmation");

    assert_eq!(paid.data.status, "paid");
    assert_eq!(paid.data.keys.len(), 2);

    let assigned = store
        .keys
        .lock()
        .unwrap()
        .iter()
        .filter(|k| k.assigned_order_id == Some(order.data.id))
        .count();
    assert_eq!(assigned, 2);
}

#[tokio::test]
async fn confirming_a_pending_order_is_rejected() {
    let store = Store::with_product(5);
    let service = service_over(&store);

    let order = service
        .command
        .create_order(
            10,
            &CreateOrderRequest {
                product_id: 1,
                quantity: 1,
            },
        )
        .await
        .expect("order");

    let result = service.command.confirm_payment(order.data.id).await;

    assert!(matches!(
        result,
        Err(ServiceError::Repo(RepositoryError::Conflict(_)))
    ));
}

#[tokio::test]
async fn short_key_pool_does_not_fail_confirmation() {
    let store = Store::with_product(5);
    let service = service_over(&store);

    let order = service
        .command
        .create_order(
            10,
            &CreateOrderRequest {
                product_id: 1,
                quantity: 1,
            },
        )
        .await
        .expect("order");

    service
        .command
        .submit_payment(order.data.id, 10, &payment())
        .await
        .expect("payment");

    let paid = service
        .command
        .confirm_payment(order.data.id)
        .await
        .expect("confirmation");

    assert_eq!(paid.data.status, "paid");
    assert!(paid.data.keys.is_empty());
}

#[tokio::test]
async fn keys_only_attach_to_paid_orders() {
    let store = Store::with_product(5);
    store.seed_keys(1, 3);
    let service = service_over(&store);

    let order = service
        .command
        .create_order(
            10,
            &CreateOrderRequest {
                product_id: 1,
                quantity: 1,
            },
        )
        .await
        .expect("order");

    let result = service
        .command
        .assign_keys(order.data.id, &AssignKeysRequest { count: 1 })
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Repo(RepositoryError::Conflict(_)))
    ));
}

#[tokio::test]
async fn mark_paid_skips_the_payment_step() {
    let store = Store::with_product(5);
    store.seed_keys(1, 1);
    let service = service_over(&store);

    let order = service
        .command
        .create_order(
            10,
            &CreateOrderRequest {
                product_id: 1,
                quantity: 1,
            },
        )
        .await
        .expect("order");

    let paid = service
        .command
        .mark_paid(order.data.id)
        .await
        .expect("mark paid");
    assert_eq!(paid.data.status, "paid");

    let assigned = service
        .command
        .assign_keys(order.data.id, &AssignKeysRequest { count: 1 })
        .await
        .expect("assignment");
    assert_eq!(assigned.data.keys.len(), 1);
}

#[tokio::test]
async fn revoked_keys_never_return_to_the_pool() {
    let store = Store::with_product(5);
    store.seed_keys(1, 1);
    let service = service_over(&store);

    let order = service
        .command
        .create_order(
            10,
            &CreateOrderRequest {
                product_id: 1,
                quantity: 1,
            },
        )
        .await
        .expect("order");

    service
        .command
        .mark_paid(order.data.id)
        .await
        .expect("mark paid");
    service
        .command
        .assign_keys(order.data.id, &AssignKeysRequest { count: 1 })
        .await
        .expect("assignment");

    let key_id = store.keys.lock().unwrap()[0].key_id;
    let key_repo = MockKeyRepo(store.clone());
    key_repo.revoke_key(key_id).await.expect("revoke");

    // The revoked key is detached and cannot be claimed again.
    let result = service
        .command
        .assign_keys(order.data.id, &AssignKeysRequest { count: 1 })
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::Repo(RepositoryError::Conflict(_)))
    ));

    let order_view = service
        .query
        .find_by_id(order.data.id, 10, false)
        .await
        .expect("order view");
    assert!(order_view.data.keys.is_empty());
}
