use validator::ValidationError;

// Closed sets of values stored as text columns
macro_rules! text_category {
    ($name:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name{
            $($variant),+
        }

        impl $name {
            pub const ALLOWED: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub fn parse(value: &str) -> Result<Self, ValidationError> {
                match value {
                    $($text => Ok($name::$variant),)+
                    _ => Err(not_allowed($field, Self::ALLOWED))
                }
            }
        }
    };
}

text_category!(CustomerType, "type", {
    OutOfTown => "OUT OF TOWN",
    InTown => "IN TOWN",
    RoseFamily => "PART OF THE ROSE FAMILY",
});

text_category!(BillSplit, "bill_split", {
    PerGroup => "PER GROUP",
    PerPerson => "PER PERSON",
    WithRatios => "WITH RATIOS",
});

text_category!(DishType, "type", {
    Food => "FOOD",
    Drink => "DRINK",
});

fn not_allowed(field: &'static str, allowed: &[&str]) -> ValidationError {
    let mut error = ValidationError::new("in");
    error.message = Some(format!(
        "The {} must be one of the following types: {}",
        field,
        allowed.join(",")
    ).into());
    error
}

// Hooks for `#[validate(custom(...))]`
pub fn validate_customer_type(value: &str) -> Result<(), ValidationError> {
    CustomerType::parse(value).map(|_| ())
}

pub fn validate_bill_split(value: &str) -> Result<(), ValidationError> {
    BillSplit::parse(value).map(|_| ())
}

pub fn validate_dish_type(value: &str) -> Result<(), ValidationError> {
    DishType::parse(value).map(|_| ())
}
