use rand::{distributions::Alphanumeric, thread_rng, Rng};

const CODE_LENGTH: usize = 10;

// Public identifier of a row, e.g. `CUS-7QK2M0ZP1D`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind{
    Customer,
    Dish,
    Product,
    Booking,
    Order
}

impl ReferenceKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ReferenceKind::Customer => "CUS",
            ReferenceKind::Dish => "DSH",
            ReferenceKind::Product => "PRD",
            ReferenceKind::Booking => "BKG",
            ReferenceKind::Order => "ORD"
        }
    }

    pub fn generate(&self) -> String {
        let code: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .map(|c| (c as char).to_ascii_uppercase())
            .take(CODE_LENGTH)
            .collect();

        format!("{}-{}", self.prefix(), code)
    }
}
