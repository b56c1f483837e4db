use ideabox::{
    ErrorCode,
    config::Credentials,
    providers::gateway_from_credentials,
    types::MarketingCopy,
};

#[tokio::test]
async fn nothing_configured_fails_fast() {
    let gateway = gateway_from_credentials(Credentials::empty(), Default::default());

    let err = gateway
        .generate_title("咖啡", "小红书", "活泼")
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::NoProviderConfigured);
    assert!(gateway.registry().list_available().is_empty());
}

#[test]
fn catalog_is_empty_without_credentials() {
    let gateway = gateway_from_credentials(Credentials::empty(), Default::default());
    let catalog = ideabox::provider::TextGeneration::catalog(&gateway);
    assert!(catalog.models.is_empty());
    assert!(catalog.default_model.is_none());
}
