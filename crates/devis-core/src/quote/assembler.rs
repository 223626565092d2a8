//! Merge of extracted fields and caller constants into a page record.

use crate::models::columns as col;
use crate::models::{FieldValue, OperationConfig, PageRecord, PartyConstants};

use super::address::AddressSegments;
use super::rules::UnitCount;
use super::scalar::ScalarFields;

/// Builds one [`PageRecord`] per page.
///
/// The professional identity fills both the "performing the work" and the
/// "named on the quote" slots, and contact and works address values are
/// written twice because the template models two roles for them.
#[derive(Debug, Clone, Default)]
pub struct RecordAssembler {
    parties: PartyConstants,
    operation: OperationConfig,
}

impl RecordAssembler {
    pub fn new(parties: PartyConstants, operation: OperationConfig) -> Self {
        Self { parties, operation }
    }

    /// Assemble the record for the page at `page_index` (0-based).
    pub fn assemble(
        &self,
        page_index: usize,
        scalars: &ScalarFields,
        address: &AddressSegments,
    ) -> PageRecord {
        let mut record = PageRecord::new();

        // General
        record.set(
            col::OPERATION_NUMBER,
            FieldValue::Integer(i64::try_from(page_index).map_or(i64::MAX, |i| i + 1)),
        );
        record.set(col::FICHE_CODE, self.operation.fiche_code.as_str());
        record.set(col::FRAME_TYPE, "");
        record.set(col::REQUESTER_NAME, self.parties.requester_name.as_str());
        record.set(col::REQUESTER_SIREN, self.parties.requester_siren.as_str());
        record.set(col::DELEGATE_NAME, "");
        record.set(col::DELEGATE_SIREN, "");
        record.set(col::BONUS_CATEGORY, self.operation.bonus_category.as_str());

        // Reference, dates, premium
        let premium = FieldValue::from_decimal(scalars.premium.as_ref().and_then(|m| m.value));
        record.set(col::INTERNAL_REFERENCE, scalars.reference.as_str());
        record.set(col::RAI_SENT_DATE, scalars.quote_date.as_str());
        record.set(col::COMMITMENT_DATE, scalars.quote_date.as_str());
        record.set(col::INCENTIVE_AMOUNT, premium.clone());

        // Works address, twice
        let works = &address.works;
        record.set(col::SITE_NAME, address.site_name.as_str());
        record.set(col::WORKS_STREET, works.street.as_str());
        record.set(col::WORKS_POSTAL_CODE, works.postal_code.as_str());
        record.set(col::WORKS_CITY, works.city.as_str());
        record.set(col::SITE_STREET, works.street.as_str());
        record.set(col::SITE_POSTAL_CODE, works.postal_code.as_str());
        record.set(col::SITE_CITY, works.city.as_str());

        // Beneficiary
        let office = &address.office;
        record.set(col::BENEFICIARY_NAME, scalars.header.beneficiary_name.as_str());
        record.set(col::BENEFICIARY_SIREN, scalars.siren.as_str());
        record.set(col::OFFICE_STREET, office.street.as_str());
        record.set(col::OFFICE_POSTAL_CODE, office.postal_code.as_str());
        record.set(col::OFFICE_CITY, office.city.as_str());

        // Contact, twice
        record.set(col::PHONE, scalars.phone.as_str());
        record.set(col::EMAIL, scalars.email.as_str());
        record.set(col::SITE_PHONE, scalars.phone.as_str());
        record.set(col::SITE_EMAIL, scalars.email.as_str());
        record.set(col::BENEFICIARY_SURNAME, scalars.representative.surname.as_str());
        record.set(col::BENEFICIARY_GIVEN_NAME, scalars.representative.given_name.as_str());

        // Professional, in both slots
        record.set(col::OPERATOR_SIREN, self.parties.professional_siren.as_str());
        record.set(col::OPERATOR_NAME, self.parties.professional_name.as_str());
        record.set(col::CONTRACTOR_NAME, self.parties.professional_name.as_str());
        record.set(col::CONTRACTOR_SIREN, self.parties.professional_siren.as_str());

        // Quote and amounts
        record.set(col::QUOTE_NUMBER, scalars.header.number.as_str());
        record.set(col::QUOTE_AMOUNT, premium);
        record.set(
            col::UNIT_COUNT,
            match scalars.unit_count {
                UnitCount::Count(n) => FieldValue::Integer(n),
                UnitCount::NotANumber => FieldValue::NotANumber,
            },
        );

        record
    }
}
