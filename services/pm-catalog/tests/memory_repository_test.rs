//! 产品仓储契约测试（内存实现）

use rust_decimal::Decimal;

use pm_catalog::domain::entities::Product;
use pm_catalog::domain::enums::Category;
use pm_catalog::domain::repositories::ProductRepository;
use pm_catalog::domain::value_objects::ProductId;
use pm_catalog::infrastructure::persistence::MemoryProductRepository;

/// 测试辅助：创建瞬态产品
fn test_product(name: &str, price: Decimal, available: bool, category: Category) -> Product {
    Product::new(name, format!("{} description", name), price, available, category)
        .expect("valid product")
}

#[tokio::test]
async fn test_create_assigns_id_and_find_returns_it() {
    let repo = MemoryProductRepository::new();
    let product = test_product("Fedora", Decimal::new(1250, 2), true, Category::Cloths);

    let created = repo.create(&product).await.unwrap();
    let id = created.id().expect("id assigned").clone();

    let found = repo.find(&id).await.unwrap().expect("product exists");
    assert_eq!(found.name(), product.name());
    assert_eq!(found.description(), product.description());
    assert_eq!(found.price(), product.price());
    assert_eq!(found.available(), product.available());
    assert_eq!(found.category(), product.category());
}

#[tokio::test]
async fn test_create_rejects_persisted_product() {
    let repo = MemoryProductRepository::new();
    let product = test_product("Fedora", Decimal::new(1250, 2), true, Category::Cloths)
        .with_id(ProductId::new());

    let err = repo.create(&product).await.unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_update_without_id_fails() {
    let repo = MemoryProductRepository::new();
    let product = test_product("Fedora", Decimal::new(1250, 2), true, Category::Cloths);

    let err = repo.update(&product).await.unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_update_nonexistent_id_not_found() {
    let repo = MemoryProductRepository::new();
    let id = ProductId::new();
    let product = test_product("Fedora", Decimal::new(1250, 2), true, Category::Cloths)
        .with_id(id.clone());

    let err = repo.update(&product).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert!(err.to_string().contains(&id.to_string()));
}

#[tokio::test]
async fn test_update_changes_fields() {
    let repo = MemoryProductRepository::new();
    let created = repo
        .create(&test_product("Fedora", Decimal::new(1250, 2), true, Category::Cloths))
        .await
        .unwrap();
    let id = created.id().unwrap().clone();

    let updated = Product::new(
        "Fedora",
        "Just a simple description to test with",
        Decimal::new(1250, 2),
        false,
        Category::Cloths,
    )
    .unwrap()
    .with_id(id.clone());
    repo.update(&updated).await.unwrap();

    let found = repo.find(&id).await.unwrap().unwrap();
    assert_eq!(found.description(), "Just a simple description to test with");
    assert!(!found.available());
}

#[tokio::test]
async fn test_delete_removes_product_and_is_idempotent() {
    let repo = MemoryProductRepository::new();
    let created = repo
        .create(&test_product("Fedora", Decimal::new(1250, 2), true, Category::Cloths))
        .await
        .unwrap();
    let id = created.id().unwrap().clone();

    repo.delete(&id).await.unwrap();
    assert!(repo.find(&id).await.unwrap().is_none());

    // 再次删除不报错
    repo.delete(&id).await.unwrap();
}

#[tokio::test]
async fn test_all_products() {
    let repo = MemoryProductRepository::new();
    assert!(repo.all().await.unwrap().is_empty());

    for i in 0..5 {
        repo.create(&test_product(
            &format!("Product {}", i),
            Decimal::new(100 + i, 2),
            i % 2 == 0,
            Category::Tools,
        ))
        .await
        .unwrap();
    }

    assert_eq!(repo.all().await.unwrap().len(), 5);
}

/// 每个过滤器返回 all() 中恰好匹配的子集
#[tokio::test]
async fn test_filters_return_matching_subsets() {
    let repo = MemoryProductRepository::new();
    let fixtures = [
        ("Fedora", Decimal::new(1250, 2), true, Category::Cloths),
        ("Fedora", Decimal::new(999, 2), false, Category::Cloths),
        ("Hammer", Decimal::new(1250, 2), true, Category::Tools),
        ("Soup", Decimal::new(250, 2), false, Category::Food),
        ("Couch", Decimal::new(49900, 2), true, Category::Housewares),
    ];
    for (name, price, available, category) in fixtures {
        repo.create(&test_product(name, price, available, category))
            .await
            .unwrap();
    }

    let all = repo.all().await.unwrap();

    let by_name = repo.find_by_name("Fedora").await.unwrap();
    assert_eq!(by_name.len(), 2);
    assert_eq!(
        by_name.len(),
        all.iter().filter(|p| p.name() == "Fedora").count()
    );

    let by_category = repo.find_by_category(Category::Cloths).await.unwrap();
    assert_eq!(by_category.len(), 2);
    assert!(by_category.iter().all(|p| p.category() == Category::Cloths));

    let by_availability = repo.find_by_availability(true).await.unwrap();
    assert_eq!(by_availability.len(), 3);
    assert!(by_availability.iter().all(|p| p.available()));

    let by_price = repo.find_by_price(Decimal::new(1250, 2)).await.unwrap();
    assert_eq!(by_price.len(), 2);
    assert!(by_price.iter().all(|p| p.price() == Decimal::new(1250, 2)));
}
