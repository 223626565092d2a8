//! End-to-end conversion from page text to the written table.

use calamine::{open_workbook_auto, Data, Reader};
use devis_core::models::columns as col;
use devis_core::quote::WarningCode;
use devis_core::sheet::read_schema_columns;
use devis_core::{
    convert_pdf, write_table, DevisConfig, FieldValue, PdfError, QuoteConverter, TableFormat,
};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

const SCENARIO_A: &str = "Customer Number : 12345\n\
                          Date : 01/02/2024\n\
                          CEE Premium : 1 234,50 €";

const SCENARIO_B: &str = "DEVIS Q-77 ACME SAS\n\
                          ADDRESS OF WORKS :\n\
                          ACME SITE\n\
                          12 Rue X\n\
                          75001 PARIS";

const FRENCH_PAGE: &str = "DEVIS 2025-1424 SCI LES PALMIERS\n\
                           Numéro Client : C-0042\n\
                           Date : 15/03/2025\n\
                           ADRESSE DES TRAVAUX :\n\
                           RESIDENCE LES PALMIERS\n\
                           12 Rue des Lilas\n\
                           97400 SAINT-DENIS\n\
                           SCI LES PALMIERS Siret : 82906782600015\n\
                           3 Avenue de la Mer\n\
                           97410 SAINT-PIERRE\n\
                           Détail Quantité Prix\n\
                           Nombre de dépose : 24\n\
                           Représenté par : MARTIN Sophie, Gérante\n\
                           Tél : 0262 12 34 56\n\
                           Mail : néant\n\
                           Prime CEE : 2\u{00a0}450,00 €";

fn schema() -> Vec<String> {
    col::default_schema()
}

fn address_columns() -> [&'static str; 11] {
    [
        col::SITE_NAME,
        col::WORKS_STREET,
        col::WORKS_POSTAL_CODE,
        col::WORKS_CITY,
        col::SITE_STREET,
        col::SITE_POSTAL_CODE,
        col::SITE_CITY,
        col::OFFICE_STREET,
        col::OFFICE_POSTAL_CODE,
        col::OFFICE_CITY,
        col::BENEFICIARY_NAME,
    ]
}

#[test]
fn test_scenario_reference_date_and_premium() {
    let report = QuoteConverter::default().convert_texts(&[SCENARIO_A]);
    let table = report.table(&schema());

    assert_eq!(table.cell(0, col::INTERNAL_REFERENCE), Some(&FieldValue::text("12345")));
    assert_eq!(table.cell(0, col::RAI_SENT_DATE), Some(&FieldValue::text("01/02/2024")));
    assert_eq!(table.cell(0, col::COMMITMENT_DATE), Some(&FieldValue::text("01/02/2024")));
    assert_eq!(
        table.cell(0, col::INCENTIVE_AMOUNT),
        Some(&FieldValue::Decimal(Decimal::new(123450, 2)))
    );
}

#[test]
fn test_scenario_works_block() {
    let report = QuoteConverter::default().convert_texts(&[SCENARIO_B]);
    let record = &report.records[0];

    assert_eq!(record.text(col::SITE_NAME), "ACME SITE");
    assert_eq!(record.text(col::WORKS_STREET), "12 Rue X");
    assert_eq!(record.text(col::WORKS_POSTAL_CODE), "75001");
    assert_eq!(record.text(col::WORKS_CITY), "PARIS");
    assert_eq!(record.text(col::SITE_STREET), "12 Rue X");
    assert_eq!(record.text(col::SITE_POSTAL_CODE), "75001");
    assert_eq!(record.text(col::SITE_CITY), "PARIS");
    assert_eq!(record.text(col::OFFICE_CITY), "PARIS");
    assert_eq!(record.text(col::QUOTE_NUMBER), "Q-77");
}

#[test]
fn test_scenario_no_works_marker() {
    let text = "DEVIS Q-1 SCI A\nNuméro Client : 7\n12 Rue X\n75001 PARIS";
    let report = QuoteConverter::default().convert_texts(&[text]);
    let record = &report.records[0];

    for column in address_columns().iter().filter(|c| **c != col::BENEFICIARY_NAME) {
        assert_eq!(record.text(column), "", "column {column:?}");
    }
    assert_eq!(record.text(col::BENEFICIARY_NAME), "SCI A");
    assert_eq!(record.text(col::INTERNAL_REFERENCE), "7");
    assert!(report.warnings.iter().any(|w| w.code == WarningCode::MissingWorksAddress));
}

#[test]
fn test_french_page() {
    let report = QuoteConverter::default().convert_texts(&[FRENCH_PAGE]);
    let record = &report.records[0];

    assert_eq!(record.text(col::SITE_NAME), "RESIDENCE LES PALMIERS");
    assert_eq!(record.text(col::WORKS_STREET), "12 Rue des Lilas");
    assert_eq!(record.text(col::OFFICE_STREET), "3 Avenue de la Mer");
    assert_eq!(record.text(col::OFFICE_POSTAL_CODE), "97410");
    assert_eq!(record.text(col::BENEFICIARY_SIREN), "829067826");
    assert_eq!(record.text(col::BENEFICIARY_SURNAME), "MARTIN");
    assert_eq!(record.text(col::BENEFICIARY_GIVEN_NAME), "Sophie");
    assert_eq!(record.text(col::EMAIL), "");
    assert_eq!(record.get(col::UNIT_COUNT), Some(&FieldValue::Integer(24)));
    assert_eq!(
        record.get(col::QUOTE_AMOUNT),
        Some(&FieldValue::Decimal(Decimal::new(245000, 2)))
    );
    assert!(report.is_clean(), "{:?}", report.warnings);
}

#[test]
fn test_row_count_and_schema_closure() {
    let columns: Vec<String> = ["Unknown column", col::QUOTE_NUMBER, col::OPERATION_NUMBER]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let pages = vec![
        Ok(devis_core::PageText::new(1, SCENARIO_A)),
        Err(PdfError::TextExtraction("broken".to_string())),
        Ok(devis_core::PageText::new(3, SCENARIO_B)),
    ];
    let report = QuoteConverter::default().convert(pages);
    let table = report.table(&columns);

    assert_eq!(table.columns, columns);
    assert_eq!(table.row_count(), 3);
    assert!(table.rows.iter().all(|row| row.len() == 3));
    assert_eq!(table.cell(0, "Unknown column"), Some(&FieldValue::Empty));
    assert_eq!(table.cell(1, col::OPERATION_NUMBER), Some(&FieldValue::Integer(2)));
    assert_eq!(table.cell(2, col::QUOTE_NUMBER), Some(&FieldValue::text("Q-77")));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].page, 2);
}

#[test]
fn test_config_constants_flow_into_rows() {
    let mut config = DevisConfig::default();
    config.parties.requester_name = "ACME ENERGIE".to_string();
    config.operation.bonus_category = "Précarité".to_string();

    let report = QuoteConverter::new(&config).convert_texts(&[SCENARIO_A]);
    assert_eq!(report.records[0].text(col::REQUESTER_NAME), "ACME ENERGIE");
    assert_eq!(report.records[0].text(col::BONUS_CATEGORY), "Précarité");
}

#[test]
fn test_xlsx_written_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Tableau_de_recensement_rempli.xlsx");

    let report = QuoteConverter::default().convert_texts(&[FRENCH_PAGE, SCENARIO_B]);
    let table = report.table(&schema());
    write_table(&table, &path, TableFormat::Xlsx, "Recensement").unwrap();

    // The written workbook is itself a valid template.
    let header = read_schema_columns(&path, "Recensement").unwrap();
    assert_eq!(header.len(), schema().len());
    assert_eq!(header[0], col::OPERATION_NUMBER);
    assert!(header.iter().any(|c| c == col::QUOTE_NUMBER));
    assert!(header.iter().any(|c| c == col::OFFICE_CITY));

    let mut workbook = open_workbook_auto(&path).unwrap();
    let range = workbook.worksheet_range("Recensement").unwrap();
    let rows: Vec<&[Data]> = range.rows().collect();
    assert_eq!(rows.len(), 3);

    let city = table.column_index(col::WORKS_CITY).unwrap();
    assert_eq!(rows[1][city], Data::String("SAINT-DENIS".to_string()));
    assert_eq!(rows[2][city], Data::String("PARIS".to_string()));

    let amount = table.column_index(col::INCENTIVE_AMOUNT).unwrap();
    assert_eq!(rows[1][amount], Data::Float(2450.0));
    assert_eq!(rows[2][amount], Data::Empty);
}

#[test]
fn test_csv_template_drives_output() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("modele.csv");
    std::fs::write(&template, "NUMERO de  devis,VILLE,VILLE\n").unwrap();

    let columns = read_schema_columns(&template, "Recensement").unwrap();
    assert_eq!(columns, vec![col::QUOTE_NUMBER, col::SITE_CITY, col::OFFICE_CITY]);

    let table = QuoteConverter::default().convert_texts(&[SCENARIO_B]).table(&columns);
    assert_eq!(
        table.rows[0],
        vec![FieldValue::text("Q-77"), FieldValue::text("PARIS"), FieldValue::text("PARIS")]
    );
}

fn two_page_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for line in ["DEVIS P-1 SCI A", "DEVIS P-2 SCI B"] {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => 2,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[test]
fn test_convert_pdf_one_row_per_page() {
    let report = convert_pdf(&two_page_pdf(), &DevisConfig::default()).unwrap();

    assert_eq!(report.page_count, 2);
    assert_eq!(report.records.len(), 2);
    assert_eq!(
        report.records[1].get(col::OPERATION_NUMBER),
        Some(&FieldValue::Integer(2))
    );
}

#[test]
fn test_convert_pdf_rejects_non_pdf() {
    let result = convert_pdf(b"%PD no", &DevisConfig::default());
    assert!(matches!(result, Err(devis_core::DevisError::Pdf(_))));
}
