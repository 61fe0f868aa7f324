//! Loads the bundled `config/default.toml` and `locales/` the way `main`
//! does, so edits to the shipped files stay valid.

use ara_notification_composer::catalog::create_catalog;
use ara_notification_composer::config::{SenderBackend, Settings};
use ara_notification_composer::localization::ResourceTranslator;
use ara_notification_composer::projection::CatalogProjector;

#[tokio::test]
async fn test_default_config_builds_catalog_and_translations() {
    let settings = Settings::new().unwrap();

    assert_eq!(settings.server.port, 8082);
    assert_eq!(settings.sender.backend, SenderBackend::Log);
    assert_eq!(settings.localization.resource_path.as_deref(), Some("locales"));

    let catalog = create_catalog(&settings.catalog).unwrap();
    assert_eq!(catalog.groups().len(), 2);
    assert_eq!(catalog.len(), 3);
    assert!(catalog.get_by_name("order.created").unwrap().has_template());

    let translator = std::sync::Arc::new(
        ResourceTranslator::from_config(&settings.localization).unwrap(),
    );
    let projector = CatalogProjector::new(catalog, translator);

    let groups = projector.assignable_notifiers("zh-Hans").await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "orders");
    assert_eq!(groups[0].display_name, "订单");
    assert_eq!(groups[0].notifications.len(), 1);
    assert_eq!(groups[0].notifications[0].display_name, "订单已创建");
    assert_eq!(groups[0].notifications[0].description, "客户下单时发送");

    let templates = projector.assignable_templates("en-US").await.unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].name, "order.created");
    assert_eq!(templates[0].title, "Order created");
}
