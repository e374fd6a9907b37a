//! 产品查询

/// 获取产品查询
#[derive(Debug, Clone)]
pub struct GetProductQuery {
    pub id: String,
}

/// 列表产品查询
///
/// 暂不支持过滤与分页。
#[derive(Debug, Clone, Default)]
pub struct ListProductsQuery {}
