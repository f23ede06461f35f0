use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::lenient::{self, LenientNumber};

/// Default packing & forwarding percentage.
pub const DEFAULT_PACKING_PERCENT: Decimal = dec!(3);

/// One cart line: a product ordered in whole cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    /// Number of cases ordered or dispatched (≥ 1).
    pub cases: u32,
    /// Boxes per case (≥ 1).
    pub per_case: u32,
    /// Price per box.
    pub rate_per_box: Decimal,
    /// Discount applied to this line only, in percent.
    pub discount_percent: Decimal,
    /// Short code of the godown the stock is drawn from (e.g. "M2").
    pub godown: Option<String>,
}

impl LineItem {
    /// Number of boxes on this line.
    pub fn quantity(&self) -> u64 {
        u64::from(self.cases) * u64::from(self.per_case)
    }

    /// Line value after the line discount, unrounded.
    ///
    /// Saturates at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
    pub fn amount(&self) -> Decimal {
        let discount_factor =
            Decimal::ONE.saturating_sub(self.discount_percent / Decimal::ONE_HUNDRED);
        Decimal::from(self.quantity())
            .saturating_mul(self.rate_per_box)
            .saturating_mul(discount_factor)
    }
}

/// A cart line as received from a form, numbers not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItemInput {
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub cases: LenientNumber,
    pub per_case: LenientNumber,
    pub rate_per_box: LenientNumber,
    pub discount_percent: LenientNumber,
    pub godown: Option<String>,
}

impl LineItemInput {
    /// Coerce into a [`LineItem`]. Never fails: counts default to 1,
    /// rate and discount default to 0.
    pub fn normalize(&self) -> LineItem {
        LineItem {
            product_id: self.product_id.clone(),
            product_name: self.product_name.clone(),
            brand: self.brand.clone(),
            cases: lenient::count_or_one(&self.cases, "cases"),
            per_case: lenient::count_or_one(&self.per_case, "per_case"),
            rate_per_box: lenient::amount_or_zero(&self.rate_per_box, "rate_per_box"),
            discount_percent: lenient::percent_or(
                &self.discount_percent,
                Decimal::ZERO,
                "discount_percent",
            ),
            godown: self.godown.clone(),
        }
    }
}

/// GST regime of a bill. Exactly one applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// No GST lines: bill of supply or composition dealer.
    #[default]
    None,
    /// Intra-state: CGST 9% + SGST 9%.
    CgstSgst,
    /// Inter-state: IGST 18%.
    Igst,
}

impl TaxMode {
    /// CGST rate in percent (also the SGST rate).
    pub const CGST_RATE: Decimal = dec!(9);
    /// SGST rate in percent.
    pub const SGST_RATE: Decimal = dec!(9);
    /// IGST rate in percent.
    pub const IGST_RATE: Decimal = dec!(18);

    /// Resolve the three checkbox flags of a billing form.
    ///
    /// IGST takes precedence; CGST+SGST only applies when both are ticked.
    pub fn from_flags(apply_cgst: bool, apply_sgst: bool, apply_igst: bool) -> Self {
        if apply_igst {
            Self::Igst
        } else if apply_cgst && apply_sgst {
            Self::CgstSgst
        } else {
            Self::None
        }
    }

    /// The `(cgst, sgst, igst)` checkbox state for this mode.
    pub fn flags(&self) -> (bool, bool, bool) {
        match self {
            Self::None => (false, false, false),
            Self::CgstSgst => (true, true, false),
            Self::Igst => (false, false, true),
        }
    }

    /// Suggest the regime from the GST state codes of seller and place of supply.
    pub fn for_supply(seller_state: &str, customer_state: &str) -> Self {
        if seller_state.trim() == customer_state.trim() {
            Self::CgstSgst
        } else {
            Self::Igst
        }
    }

    /// Combined tax rate in percent.
    pub fn total_rate(&self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::CgstSgst => Self::CGST_RATE + Self::SGST_RATE,
            Self::Igst => Self::IGST_RATE,
        }
    }

    /// Label printed on bills.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "No Tax",
            Self::CgstSgst => "CGST + SGST",
            Self::Igst => "IGST",
        }
    }
}

/// Per-bill charges, discounts and tax regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeConfig {
    /// Discount on the whole taxable base (after packing and extra value), in percent.
    pub additional_discount_percent: Decimal,
    /// Packing & forwarding rate in percent.
    pub packing_percent: Decimal,
    /// Whether the packing & forwarding fee is charged at all.
    pub apply_processing_fee: bool,
    /// Manually entered taxable amount (e.g. freight), added before discount.
    pub extra_taxable_value: Option<Decimal>,
    pub tax_mode: TaxMode,
}

impl Default for ChargeConfig {
    fn default() -> Self {
        Self {
            additional_discount_percent: Decimal::ZERO,
            packing_percent: DEFAULT_PACKING_PERCENT,
            apply_processing_fee: true,
            extra_taxable_value: None,
            tax_mode: TaxMode::None,
        }
    }
}

/// Charge settings as received from a billing form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeConfigInput {
    pub additional_discount: LenientNumber,
    pub packing_percent: LenientNumber,
    pub apply_processing_fee: bool,
    pub extra_taxable_value: LenientNumber,
    pub apply_cgst: bool,
    pub apply_sgst: bool,
    pub apply_igst: bool,
}

impl Default for ChargeConfigInput {
    fn default() -> Self {
        Self {
            additional_discount: LenientNumber::missing(),
            packing_percent: LenientNumber::missing(),
            apply_processing_fee: true,
            extra_taxable_value: LenientNumber::missing(),
            apply_cgst: false,
            apply_sgst: false,
            apply_igst: false,
        }
    }
}

impl ChargeConfigInput {
    /// Coerce into a [`ChargeConfig`]. Never fails.
    pub fn normalize(&self) -> ChargeConfig {
        let extra = lenient::amount_or_zero(&self.extra_taxable_value, "extra_taxable_value");
        ChargeConfig {
            additional_discount_percent: lenient::percent_or(
                &self.additional_discount,
                Decimal::ZERO,
                "additional_discount",
            ),
            packing_percent: lenient::non_negative_or(
                &self.packing_percent,
                DEFAULT_PACKING_PERCENT,
                "packing_percent",
            ),
            apply_processing_fee: self.apply_processing_fee,
            extra_taxable_value: (!extra.is_zero()).then_some(extra),
            tax_mode: TaxMode::from_flags(self.apply_cgst, self.apply_sgst, self.apply_igst),
        }
    }
}

/// Calculated bill totals.
///
/// Monetary fields are rounded to 2 decimals for display; `grand_total` is
/// rounded to whole rupees from the unrounded sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of discounted line amounts (goods value).
    pub subtotal: Decimal,
    /// Packing & forwarding charge.
    pub packing: Decimal,
    /// Manually added taxable value.
    pub extra_taxable_value: Decimal,
    /// subtotal + packing + extra.
    pub taxable_before_discount: Decimal,
    /// Additional discount on the taxable base.
    pub discount_amount: Decimal,
    /// Net taxable value after the additional discount.
    pub taxable_amount: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    /// Difference between the rounded grand total and the exact sum.
    pub round_off: Decimal,
    /// Payable amount in whole rupees.
    pub grand_total: Decimal,
    /// Σ cases across all lines.
    pub total_cases: u64,
    /// Σ boxes across all lines.
    pub total_quantity: u64,
}

impl InvoiceTotals {
    /// Sum of all GST components (display-rounded).
    pub fn tax_total(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }
}

/// Seller or customer on a bill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    /// Two-digit GST state code (e.g. "33" for Tamil Nadu).
    pub state_code: Option<String>,
    /// 15-character GST identification number.
    pub gstin: Option<String>,
    /// 10-digit mobile number.
    pub mobile: Option<String>,
}

impl Party {
    /// State code, falling back to the first two characters of the GSTIN.
    pub fn effective_state_code(&self) -> Option<&str> {
        self.state_code
            .as_deref()
            .or_else(|| self.gstin.as_deref().and_then(|g| g.get(..2)))
    }
}

/// Kind of document produced from a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// GST tax invoice.
    #[default]
    TaxInvoice,
    /// Invoice without GST lines (composition dealer, exempt supply).
    BillOfSupply,
    /// Quotation before confirmation.
    Estimate,
    /// Delivery challan accompanying goods in transit.
    DeliveryChallan,
}

impl DocumentKind {
    /// Title printed at the top of the document.
    pub fn title(&self) -> &'static str {
        match self {
            Self::TaxInvoice => "Tax Invoice",
            Self::BillOfSupply => "Bill of Supply",
            Self::Estimate => "Estimate",
            Self::DeliveryChallan => "Delivery Challan",
        }
    }

    /// PDF file name for a document with the given identifier.
    ///
    /// Bills are saved under their bill number (`INV-2024-25-0001.pdf`);
    /// other documents get a type prefix (`Challan_DC-0001.pdf`).
    pub fn pdf_filename(&self, identifier: &str) -> String {
        let id: String = identifier
            .trim()
            .chars()
            .map(|c| if c == '/' || c == '\\' { '-' } else { c })
            .collect();
        match self {
            Self::TaxInvoice | Self::BillOfSupply => format!("{id}.pdf"),
            Self::Estimate => format!("Estimate_{id}.pdf"),
            Self::DeliveryChallan => format!("Challan_{id}.pdf"),
        }
    }
}

/// A confirmed booking / bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub bill_number: String,
    pub date: NaiveDate,
    pub kind: DocumentKind,
    pub seller: Option<Party>,
    pub customer: Party,
    pub items: Vec<LineItem>,
    pub charges: ChargeConfig,
    /// Set by `calculate_totals()` via the builder or [`Booking::recalculate`].
    pub totals: Option<InvoiceTotals>,
    pub notes: Vec<String>,
}

impl Booking {
    /// Recompute totals after the cart or charges were edited.
    pub fn recalculate(&mut self) -> &InvoiceTotals {
        self.totals
            .insert(super::calc::calculate_totals(&self.items, &self.charges))
    }

    /// File name of the printed bill.
    pub fn pdf_filename(&self) -> String {
        self.kind.pdf_filename(&self.bill_number)
    }
}
