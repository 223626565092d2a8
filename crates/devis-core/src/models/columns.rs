//! Column names of the RES-EC-104 "Recensement" template.
//!
//! Names match the template headers byte for byte, including embedded line
//! breaks, trailing spaces and the `.1`/`.2` suffixes given to repeated
//! headers when the template is read.

pub const OPERATION_NUMBER: &str = "Opération n°";
pub const FICHE_CODE: &str = "Code Fiche";
pub const FRAME_TYPE: &str = "Type de trame (TOP/TPM)";
pub const REQUESTER_NAME: &str = "RAISON SOCIALE \ndu demandeur";
pub const REQUESTER_SIREN: &str = "SIREN \ndu demandeur";
pub const DELEGATE_NAME: &str = " Raison sociale du mandataire assurant le rôle actif et incitatif";
pub const DELEGATE_SIREN: &str = "Numéro SIREN du mandataire assurant le rôle actif et incitatif";
pub const BONUS_CATEGORY: &str = "Nature de la bonification";
pub const INTERNAL_REFERENCE: &str = "REFERENCE interne de l'opération";
pub const RAI_SENT_DATE: &str = "DATE d'envoi du RAI";
pub const COMMITMENT_DATE: &str = "DATE D'ENGAGEMENT\nde l'opération";
pub const INCENTIVE_AMOUNT: &str = "MONTANT de l'incitation financière CEE";
pub const BENEFICIARY_SURNAME: &str = "NOM \ndu bénéficiaire \nde l'opération ";
pub const BENEFICIARY_GIVEN_NAME: &str = "PRENOM \ndu bénéficiaire \nde l'opération";
pub const WORKS_STREET: &str = "ADRESSE \nde l'opération";
pub const WORKS_POSTAL_CODE: &str = "CODE POSTAL\n(sans cedex)";
pub const WORKS_CITY: &str = "VILLE\n";
pub const PHONE: &str = "Numéro de téléphone du bénéficiaire";
pub const EMAIL: &str = "Adresse de courriel du bénéficiaire";
pub const SITE_NAME: &str = "NOM DU SITE bénéficiaire \nde l'opération";
pub const SITE_STREET: &str = "ADRESSE \nde l'opération.1";
pub const SITE_POSTAL_CODE: &str = "CODE POSTAL\n(sans cedex).1";
pub const SITE_CITY: &str = "VILLE";
pub const BENEFICIARY_NAME: &str = "RAISON SOCIALE \ndu bénéficiaire \nde l'opération";
pub const BENEFICIARY_SIREN: &str = "SIREN";
pub const OFFICE_STREET: &str = "ADRESSE \ndu siège social du bénéficiaire de l'opération";
pub const OFFICE_POSTAL_CODE: &str = "CODE POSTAL\n(sans cedex).2";
pub const OFFICE_CITY: &str = "VILLE.1";
pub const SITE_PHONE: &str = "Numéro de téléphone du bénéficiaire.1";
pub const SITE_EMAIL: &str = "Adresse de courriel du bénéficiaire.1";
pub const OPERATOR_SIREN: &str =
    "SIREN du professionnel mettant en œuvre l’opération d’économies d’énergie";
pub const OPERATOR_NAME: &str =
    "RAISON SOCIALE du professionnel mettant en œuvre l’opération d’économies d’énergie";
pub const CONTRACTOR_NAME: &str = "RAISON SOCIALE du professionnel qui figure sur le devis";
pub const CONTRACTOR_SIREN: &str = "SIREN du professionnel qui figure sur le devis";
pub const QUOTE_NUMBER: &str = "NUMERO de  devis";
pub const QUOTE_AMOUNT: &str = "MONTANT du devis (€ TTC)";
pub const UNIT_COUNT: &str = "Nombre de luminaires installés ou à installer";

/// Every column the assembler knows how to fill, in template order.
///
/// Used as the schema when no template is available.
pub const DEFAULT_SCHEMA: &[&str] = &[
    OPERATION_NUMBER,
    FICHE_CODE,
    FRAME_TYPE,
    REQUESTER_NAME,
    REQUESTER_SIREN,
    DELEGATE_NAME,
    DELEGATE_SIREN,
    BONUS_CATEGORY,
    INTERNAL_REFERENCE,
    RAI_SENT_DATE,
    COMMITMENT_DATE,
    INCENTIVE_AMOUNT,
    BENEFICIARY_SURNAME,
    BENEFICIARY_GIVEN_NAME,
    WORKS_STREET,
    WORKS_POSTAL_CODE,
    WORKS_CITY,
    PHONE,
    EMAIL,
    SITE_NAME,
    SITE_STREET,
    SITE_POSTAL_CODE,
    SITE_CITY,
    BENEFICIARY_NAME,
    BENEFICIARY_SIREN,
    OFFICE_STREET,
    OFFICE_POSTAL_CODE,
    OFFICE_CITY,
    SITE_PHONE,
    SITE_EMAIL,
    OPERATOR_SIREN,
    OPERATOR_NAME,
    CONTRACTOR_NAME,
    CONTRACTOR_SIREN,
    QUOTE_NUMBER,
    QUOTE_AMOUNT,
    UNIT_COUNT,
];

/// Check whether a name is one of the columns the assembler fills.
pub fn is_known(name: &str) -> bool {
    DEFAULT_SCHEMA.contains(&name)
}

/// The default schema as owned strings.
pub fn default_schema() -> Vec<String> {
    DEFAULT_SCHEMA.iter().map(|c| (*c).to_string()).collect()
}
