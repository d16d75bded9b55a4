use duka_api::app::catalog::model::{CreateProductRequest, ProductQuery};
use duka_api::app::catalog::service::Collection;
use duka_api::app::payment::model::PaymentStatus;
use duka_api::app::payment::service::PaymentError;
use duka_api::{CatalogService, PaymentGateway, SandboxGateway};

fn create_req(name: &str, user_id: &str) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        description: format!("{} 的描述", name),
        price: 42.0,
        user_id: user_id.to_string(),
    }
}

#[test]
fn test_create_product_starts_without_image() {
    let catalog = CatalogService::new();

    let product = catalog
        .create(Collection::Products, create_req("phone", "u1"))
        .unwrap();

    // 两步创建：文档先落库，图片地址留空等待上传完成
    assert!(product.image_url.is_empty());
    assert_eq!(product.name, "phone");

    let fetched = catalog.get(Collection::Products, product.id).unwrap();
    assert_eq!(fetched, product);
}

#[test]
fn test_attach_image_fills_url() {
    let catalog = CatalogService::new();
    let product = catalog
        .create(Collection::Products, create_req("phone", "u1"))
        .unwrap();

    let updated = catalog
        .attach_image(
            Collection::Products,
            product.id,
            "https://storage.example.com/phone.png".to_string(),
        )
        .unwrap();

    assert_eq!(updated.image_url, "https://storage.example.com/phone.png");
    let fetched = catalog.get(Collection::Products, product.id).unwrap();
    assert_eq!(fetched.image_url, updated.image_url);
}

#[test]
fn test_attach_image_unknown_product_fails() {
    let catalog = CatalogService::new();
    let result = catalog.attach_image(
        Collection::Products,
        uuid::Uuid::new_v4(),
        "https://storage.example.com/x.png".to_string(),
    );
    assert!(result.is_err());
}

#[test]
fn test_create_rejects_invalid_input() {
    let catalog = CatalogService::new();

    let mut req = create_req("phone", "u1");
    req.price = -1.0;
    assert!(catalog.create(Collection::Products, req).is_err());

    let mut req = create_req("phone", "u1");
    req.name = String::new();
    assert!(catalog.create(Collection::Products, req).is_err());
}

#[test]
fn test_list_filters_by_user() {
    let catalog = CatalogService::new();
    catalog
        .create(Collection::Products, create_req("a", "u1"))
        .unwrap();
    catalog
        .create(Collection::Products, create_req("b", "u2"))
        .unwrap();
    catalog
        .create(Collection::Products, create_req("c", "u1"))
        .unwrap();

    let query = ProductQuery {
        user_id: Some("u1".to_string()),
        name: None,
    };
    let products = catalog.list(Collection::Products, &query);

    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.user_id == "u1"));
}

#[test]
fn test_offers_are_a_separate_collection() {
    let catalog = CatalogService::new();
    catalog
        .create(Collection::Products, create_req("regular", "u1"))
        .unwrap();
    let offer = catalog
        .create(Collection::SpecialOffers, create_req("discounted", "u1"))
        .unwrap();

    let query = ProductQuery::default();
    assert_eq!(catalog.list(Collection::Products, &query).len(), 1);
    assert_eq!(catalog.list(Collection::SpecialOffers, &query).len(), 1);

    // 特价商品不会出现在普通商品集合里
    assert!(catalog.get(Collection::Products, offer.id).is_err());
}

#[tokio::test]
async fn test_sandbox_gateway_confirms_valid_phone() {
    let gateway = SandboxGateway::new();

    let intent = gateway
        .initiate_stk_push("+254712345678", 100.0)
        .await
        .unwrap();

    assert_eq!(intent.status, PaymentStatus::Confirmed);
    assert_eq!(intent.phone, "+254712345678");
    assert_eq!(intent.amount, 100.0);
}

#[tokio::test]
async fn test_sandbox_gateway_rejects_bad_input() {
    let gateway = SandboxGateway::new();

    let err = gateway.initiate_stk_push("not-a-phone", 10.0).await.unwrap_err();
    assert!(matches!(err, PaymentError::InvalidPhone(_)));

    let err = gateway
        .initiate_stk_push("+254712345678", -5.0)
        .await
        .unwrap_err();
    assert!(matches!(err, PaymentError::InvalidAmount(_)));
}
