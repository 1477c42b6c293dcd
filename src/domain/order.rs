/// Identifier assigned by the repository at insertion time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderInput {
    pub products: Vec<String>,
    pub total: f64,
    pub name: String,
    pub address: String,
}

/// Record handed to the repository. Carries no identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub products: Vec<String>,
    pub total: f64,
    pub name: String,
    pub address: String,
    pub submit: bool,
}

impl NewOrder {
    /// Copies every input field verbatim and marks the order as submitted.
    pub fn submitted(input: OrderInput) -> Self {
        Self {
            products: input.products,
            total: input.total,
            name: input.name,
            address: input.address,
            submit: true,
        }
    }

    pub fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            products: self.products,
            total: self.total,
            name: self.name,
            address: self.address,
            submit: self.submit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub products: Vec<String>,
    pub total: f64,
    pub name: String,
    pub address: String,
    pub submit: bool,
}
