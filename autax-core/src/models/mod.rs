mod calculation_input;
mod calculation_result;
mod family_status;
mod residency;
mod tax_bracket;
mod tax_year_constants;

pub use calculation_input::TaxCalculationInput;
pub use calculation_result::{TakeHomePay, TaxBracketInfo, TaxCalculationResult};
pub use family_status::FamilyStatus;
pub use residency::Residency;
pub use tax_bracket::TaxBracket;
pub use tax_year_constants::{
    ConstantsError, HelpBracket, LitoParams, MedicareLevyParams, SuperannuationParams,
    SurchargeTier, TaxYearConstants,
};
