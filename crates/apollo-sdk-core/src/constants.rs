// OpenAPI path builders following the Apollo Portal OpenAPI v1 layout

pub mod openapi_path {
    use crate::model::NamespaceTarget;

    pub const OPENAPI_PREFIX: &str = "/openapi/v1";

    fn namespace_prefix(target: &NamespaceTarget) -> String {
        format!(
            "{OPENAPI_PREFIX}/apps/{}/envs/{}/clusters/{}/namespaces/{}",
            target.app_id(),
            target.env(),
            target.cluster(),
            target.namespace()
        )
    }

    /// Single item: .../namespaces/{namespace}/items/{key}
    pub fn item(target: &NamespaceTarget, key: &str) -> String {
        format!("{}/items/{}", namespace_prefix(target), key)
    }

    /// Item collection: .../namespaces/{namespace}/items
    pub fn items(target: &NamespaceTarget) -> String {
        format!("{}/items", namespace_prefix(target))
    }

    /// Item deletion carries the operator as a query parameter since the
    /// request has no body to embed it in. The value is form-encoded so
    /// reserved characters cannot split or truncate the query.
    pub fn item_delete(target: &NamespaceTarget, key: &str, operator: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("operator", operator)
            .finish();
        format!("{}?{}", item(target, key), query)
    }

    /// Release action: .../namespaces/{namespace}/releases
    pub fn releases(target: &NamespaceTarget) -> String {
        format!("{}/releases", namespace_prefix(target))
    }
}
