//! Rule-based field extractors for mortgage insurance request text.

pub mod amount;
pub mod dates;
pub mod fuzzy;
pub mod keywords;
pub mod lender;
pub mod patterns;
pub mod rate;
pub mod tables;

pub use amount::extract_loan;
pub use dates::{extract_birth_date, extract_construction_year};
pub use fuzzy::similarity;
pub use keywords::{
    extract_gender, extract_insurance, extract_material, extract_property_type,
    infer_house_material,
};
pub use lender::resolve_lender;
pub use rate::extract_rate;
