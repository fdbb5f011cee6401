use sovoq::invoice::{Invoice, InvoiceDocument};
use test_log::test;

fn sample_invoice_json() -> &'static str {
    r#"{
        "invoice": {
            "@_documentCorrelationId": "corr-001",
            "@_docTypeId": "FT",
            "@_docInstanceId": 7,
            "@_docPlatform": "sovos",
            "@_serie": "2024A",
            "currencyISOCode": "EUR",
            "documentReferences": {
                "thirdPartyErpInternalReference": "INV-42"
            },
            "documentDates": {
                "documentDate": "2024-03-01",
                "goodsServiceAvailableDate": "2024-03-01",
                "dueDate": "2024-03-31"
            },
            "partyInformation": {
                "seller": {
                    "name": "Acme Lda",
                    "country": "PT",
                    "vatNumber": "PT500100200",
                    "address": "Rua Um 1",
                    "city": "Lisboa",
                    "zipArea": "Lisboa",
                    "zipCode": "1000-001",
                    "companyRegistrationNumber": "500100200",
                    "companyRegistrationLocation": "Lisboa",
                    "socialCapitalValue": "50000"
                },
                "buyer": {
                    "name": "Widgets BV",
                    "email": "ap@widgets.example",
                    "country": "NL",
                    "vatNumber": "NL861234567B01",
                    "address": "Straat 2",
                    "zipArea": "Amsterdam",
                    "zipCode": "1011 AB"
                }
            },
            "lineItem": [
                {
                    "@_number": 1,
                    "sellerAssignedTradeItemIdentification": "SKU-1",
                    "itemDescription": "Widget",
                    "netPrice": 10.5,
                    "netLineAmount": 21.0,
                    "grossPrice": 10.5,
                    "grossLineAmount": 21.0,
                    "lineTotalPayableAmount": 25.5,
                    "quantity": { "value": 2, "unitCodeValue": "EA" },
                    "lineVat": {
                        "taxableAmount": 21.0,
                        "taxPercentage": 23.0,
                        "taxTotalValue": 4.5
                    }
                },
                {
                    "@_number": 2,
                    "sellerAssignedTradeItemIdentification": "SKU-2",
                    "itemDescription": "Gadget",
                    "netPrice": 5.25,
                    "netLineAmount": 5.25,
                    "grossPrice": 5.25,
                    "grossLineAmount": 5.25,
                    "lineTotalPayableAmount": 6.5,
                    "quantity": { "value": 1, "unitCodeValue": "EA" },
                    "lineVat": {
                        "taxableAmount": 5.25,
                        "taxPercentage": 23.0,
                        "taxTotalValue": 1.25
                    }
                }
            ],
            "documentTotals": {
                "numberOfLines": 2,
                "totalAmountPayable": 32.0,
                "totalVatTaxableAmount": 26.25,
                "totalVatAmount": 5.75,
                "totalGrossAmount": 26.25,
                "totalNetAmount": 26.25,
                "vatSummary": {
                    "taxPercentage": 23.0,
                    "taxTotalValue": 5.75,
                    "taxableAmount": 26.25
                }
            },
            "emailNotification": {
                "email": "ap@widgets.example",
                "languageCode": "en"
            }
        }
    }"#
}

#[test]
fn parse_serialize_reparse_round_trip_preserves_every_field() {
    let doc = InvoiceDocument::from_json(sample_invoice_json()).unwrap();
    let xml = doc.invoice.to_xml().unwrap();
    let reparsed = Invoice::from_xml(&xml).unwrap();

    assert_eq!(reparsed, doc.invoice);
}

#[test]
fn round_trip_of_defaulted_document_preserves_zero_values() {
    let doc = InvoiceDocument::from_json(r#"{"invoice":{"@_serie":"2024A"}}"#).unwrap();
    let xml = doc.invoice.to_xml().unwrap();
    let reparsed = Invoice::from_xml(&xml).unwrap();

    assert_eq!(reparsed, doc.invoice);
    assert_eq!(reparsed.serie, "2024A");
    assert_eq!(reparsed.correlation_id, "");
    assert_eq!(reparsed.totals.number_of_lines, 0);
}

#[test]
fn filename_stem_equals_internal_erp_reference() {
    let doc = InvoiceDocument::from_json(sample_invoice_json()).unwrap();
    assert_eq!(doc.invoice.filename(), "INV-42.xml");
}

#[test]
fn attributes_and_elements_land_where_the_schema_says() {
    let doc = InvoiceDocument::from_json(sample_invoice_json()).unwrap();
    let xml = doc.invoice.to_xml().unwrap();

    // Attribute-prefixed JSON keys become XML attributes on the root.
    assert!(xml.contains(r#"documentCorrelationId="corr-001""#));
    assert!(xml.contains(r#"docTypeId="FT""#));
    assert!(xml.contains(r#"docInstanceId="7""#));
    assert!(xml.contains(r#"serie="2024A""#));

    // Plain keys become child elements, line items repeat.
    assert!(xml.contains("<currencyISOCode>EUR</currencyISOCode>"));
    assert!(xml.contains(r#"<lineItem number="1">"#));
    assert!(xml.contains(r#"<lineItem number="2">"#));
    assert!(xml.contains("<unitCodeValue>EA</unitCodeValue>"));
    assert_eq!(xml.matches("<lineItem").count(), 2);
}

#[test]
fn line_item_order_survives_the_round_trip() {
    let doc = InvoiceDocument::from_json(sample_invoice_json()).unwrap();
    let xml = doc.invoice.to_xml().unwrap();
    let reparsed = Invoice::from_xml(&xml).unwrap();

    let numbers: Vec<i64> = reparsed.line_items.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(reparsed.line_items[0].item_description, "Widget");
    assert_eq!(reparsed.line_items[1].item_description, "Gadget");
}
