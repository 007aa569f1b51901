use storefront_core::{FetchFailed, FetchResult};

/// Menu served when nothing else is configured.
pub const DEFAULT_MENU: [&str; 7] = [
    "Hamburguer",
    "X-Salada",
    "X-Frango",
    "X-Bacon",
    "Coca-Cola",
    "Guaraná",
    "Suco",
];

/// Supplies menu items. Implementations must not panic; every failure is `FetchFailed`.
pub trait DataProvider: Send + Sync {
    fn fetch_data(&self) -> FetchResult;
}

#[async_trait::async_trait]
pub trait AsyncDataProvider: Send + Sync {
    async fn fetch_data(&self) -> FetchResult;
}

/// Serves a fixed list, or always fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMenuProvider {
    items: Option<Vec<String>>,
}

impl StaticMenuProvider {
    pub fn new(items: Vec<String>) -> Self {
        Self { items: Some(items) }
    }

    pub fn failing() -> Self {
        Self { items: None }
    }

    fn answer(&self) -> FetchResult {
        self.items.clone().ok_or(FetchFailed)
    }
}

impl Default for StaticMenuProvider {
    fn default() -> Self {
        Self::new(DEFAULT_MENU.iter().map(|item| item.to_string()).collect())
    }
}

impl DataProvider for StaticMenuProvider {
    fn fetch_data(&self) -> FetchResult {
        self.answer()
    }
}

#[async_trait::async_trait]
impl AsyncDataProvider for StaticMenuProvider {
    async fn fetch_data(&self) -> FetchResult {
        self.answer()
    }
}
