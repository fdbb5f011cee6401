//! Invoice schema mapping between the JSON input shape and the XML
//! document submitted to the platform.
//!
//! The mapping is fixed and exhaustive: every field carries both a JSON
//! key (attributes use the `@_` prefix) and an XML name (attributes use
//! the `@` prefix). Fields absent from the input default to their zero
//! value and are still emitted in the XML output, so a rendered document
//! always has the full schema shape.

use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::SovoqError;

/// Top-level wrapper matching the `{"invoice": {...}}` input payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceDocument {
    pub invoice: Invoice,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    // Attributes must precede child elements in declaration order.
    #[serde(
        rename(serialize = "@documentCorrelationId", deserialize = "@_documentCorrelationId"),
        alias = "@documentCorrelationId"
    )]
    pub correlation_id: String,
    #[serde(
        rename(serialize = "@docTypeId", deserialize = "@_docTypeId"),
        alias = "@docTypeId"
    )]
    pub doc_type_id: String,
    #[serde(
        rename(serialize = "@docInstanceId", deserialize = "@_docInstanceId"),
        alias = "@docInstanceId"
    )]
    pub doc_instance_id: i64,
    #[serde(
        rename(serialize = "@docPlatform", deserialize = "@_docPlatform"),
        alias = "@docPlatform"
    )]
    pub doc_platform: String,
    #[serde(rename(serialize = "@serie", deserialize = "@_serie"), alias = "@serie")]
    pub serie: String,

    #[serde(rename = "currencyISOCode")]
    pub currency_iso: String,
    #[serde(rename = "documentReferences")]
    pub references: DocumentReferences,
    #[serde(rename = "documentDates")]
    pub dates: DocumentDates,
    #[serde(rename = "partyInformation")]
    pub parties: PartyInformation,
    #[serde(rename = "lineItem")]
    pub line_items: Vec<LineItem>,
    #[serde(rename = "documentTotals")]
    pub totals: DocumentTotals,
    #[serde(rename = "emailNotification")]
    pub email_notification: EmailNotification,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentReferences {
    #[serde(rename = "thirdPartyErpInternalReference")]
    pub internal_reference: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentDates {
    #[serde(rename = "documentDate")]
    pub document_date: String,
    #[serde(rename = "goodsServiceAvailableDate")]
    pub goods_service_available_date: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyInformation {
    pub seller: Seller,
    pub buyer: Buyer,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Seller {
    pub name: String,
    pub country: String,
    #[serde(rename = "vatNumber")]
    pub vat_number: String,
    pub address: String,
    pub city: String,
    #[serde(rename = "zipArea")]
    pub zip_area: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    #[serde(rename = "companyRegistrationNumber")]
    pub company_registration_number: String,
    #[serde(rename = "companyRegistrationLocation")]
    pub company_registration_location: String,
    #[serde(rename = "socialCapitalValue")]
    pub social_capital_value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Buyer {
    pub name: String,
    pub email: String,
    pub country: String,
    #[serde(rename = "vatNumber")]
    pub vat_number: String,
    pub address: String,
    #[serde(rename = "zipArea")]
    pub zip_area: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    #[serde(rename(serialize = "@number", deserialize = "@_number"), alias = "@number")]
    pub number: i64,
    #[serde(rename = "sellerAssignedTradeItemIdentification")]
    pub seller_assigned_trade_item_id: String,
    #[serde(rename = "itemDescription")]
    pub item_description: String,
    #[serde(rename = "netPrice")]
    pub net_price: f64,
    #[serde(rename = "netLineAmount")]
    pub net_line_amount: f64,
    #[serde(rename = "grossPrice")]
    pub gross_price: f64,
    #[serde(rename = "grossLineAmount")]
    pub gross_line_amount: f64,
    #[serde(rename = "lineTotalPayableAmount")]
    pub line_total_payable_amount: f64,
    pub quantity: Quantity,
    #[serde(rename = "lineVat")]
    pub line_vat: LineVat,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Quantity {
    pub value: i64,
    #[serde(rename = "unitCodeValue")]
    pub unit_code_value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineVat {
    #[serde(rename = "taxableAmount")]
    pub taxable_amount: f64,
    #[serde(rename = "taxPercentage")]
    pub tax_percentage: f64,
    #[serde(rename = "taxTotalValue")]
    pub tax_total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentTotals {
    #[serde(rename = "numberOfLines")]
    pub number_of_lines: i64,
    #[serde(rename = "totalAmountPayable")]
    pub total_amount_payable: f64,
    #[serde(rename = "totalVatTaxableAmount")]
    pub total_vat_taxable_amount: f64,
    #[serde(rename = "totalVatAmount")]
    pub total_vat_amount: f64,
    #[serde(rename = "totalGrossAmount")]
    pub total_gross_amount: f64,
    #[serde(rename = "totalNetAmount")]
    pub total_net_amount: f64,
    #[serde(rename = "vatSummary")]
    pub vat_summary: VatSummary,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VatSummary {
    #[serde(rename = "taxPercentage")]
    pub tax_percentage: f64,
    #[serde(rename = "taxTotalValue")]
    pub tax_total_value: f64,
    #[serde(rename = "taxableAmount")]
    pub taxable_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailNotification {
    pub email: String,
    #[serde(rename = "languageCode")]
    pub language_code: String,
}

impl InvoiceDocument {
    /// Parse the JSON input payload. Malformed JSON or a type mismatch is
    /// an error for the top-level handler, never a process abort.
    pub fn from_json(input: &str) -> Result<Self, SovoqError> {
        serde_json::from_str(input).map_err(|e| SovoqError::InvoiceParse {
            reason: e.to_string(),
        })
    }
}

impl Invoice {
    /// Render the indented XML document submitted to the platform. The
    /// root element is `invoice`; no XML declaration is emitted.
    pub fn to_xml(&self) -> Result<String, SovoqError> {
        let mut out = String::new();
        let mut ser = Serializer::with_root(&mut out, Some("invoice")).map_err(|e| {
            SovoqError::XmlRender {
                reason: e.to_string(),
            }
        })?;
        ser.indent(' ', 1);
        self.serialize(ser).map_err(|e| SovoqError::XmlRender {
            reason: e.to_string(),
        })?;
        Ok(out)
    }

    /// Re-parse an emitted XML document.
    pub fn from_xml(input: &str) -> Result<Self, SovoqError> {
        quick_xml::de::from_str(input).map_err(|e| SovoqError::InvoiceParse {
            reason: e.to_string(),
        })
    }

    /// Filename stem for the submission envelope, derived from the
    /// internal ERP reference.
    pub fn filename(&self) -> String {
        format!("{}.xml", self.references.internal_reference)
    }
}
