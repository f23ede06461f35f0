use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::calc;
use super::error::{GodownError, join_errors};
use super::types::*;
use super::validation;

/// Builder for bookings and bills.
///
/// ```
/// use godown::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let booking = BookingBuilder::new("INV/2024-25/0001", NaiveDate::from_ymd_opt(2024, 10, 20).unwrap())
///     .customer(PartyBuilder::new("Ganesh Traders").state_code("33").build())
///     .add_item(LineItemBuilder::new("p-7", "Twinkling Star", 4, 10, dec!(85)).build())
///     .tax_mode(TaxMode::CgstSgst)
///     .build()
///     .unwrap();
///
/// assert_eq!(booking.totals.unwrap().subtotal, dec!(3400.00));
/// ```
pub struct BookingBuilder {
    bill_number: String,
    date: NaiveDate,
    kind: DocumentKind,
    seller: Option<Party>,
    customer: Option<Party>,
    items: Vec<LineItem>,
    charges: ChargeConfig,
    notes: Vec<String>,
}

impl BookingBuilder {
    pub fn new(bill_number: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            bill_number: bill_number.into(),
            date,
            kind: DocumentKind::TaxInvoice,
            seller: None,
            customer: None,
            items: Vec::new(),
            charges: ChargeConfig::default(),
            notes: Vec::new(),
        }
    }

    pub fn kind(mut self, kind: DocumentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn seller(mut self, party: Party) -> Self {
        self.seller = Some(party);
        self
    }

    pub fn customer(mut self, party: Party) -> Self {
        self.customer = Some(party);
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Add a line straight from form input.
    pub fn add_item_input(mut self, input: &LineItemInput) -> Self {
        self.items.push(input.normalize());
        self
    }

    /// Replace all charge settings.
    pub fn charges(mut self, charges: ChargeConfig) -> Self {
        self.charges = charges;
        self
    }

    pub fn tax_mode(mut self, mode: TaxMode) -> Self {
        self.charges.tax_mode = mode;
        self
    }

    pub fn additional_discount(mut self, percent: Decimal) -> Self {
        self.charges.additional_discount_percent = percent;
        self
    }

    /// Charge packing & forwarding at `percent`.
    pub fn packing(mut self, percent: Decimal) -> Self {
        self.charges.apply_processing_fee = true;
        self.charges.packing_percent = percent;
        self
    }

    pub fn without_packing(mut self) -> Self {
        self.charges.apply_processing_fee = false;
        self
    }

    pub fn extra_taxable_value(mut self, amount: Decimal) -> Self {
        self.charges.extra_taxable_value = Some(amount);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Build the booking, calculating totals and running validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Booking, GodownError> {
        let booking = self.build_unchecked()?;

        let errors = validation::validate_booking(&booking);
        if !errors.is_empty() {
            return Err(GodownError::Validation(join_errors(&errors)));
        }

        tracing::debug!(
            bill_number = %booking.bill_number,
            lines = booking.items.len(),
            "booking built"
        );
        Ok(booking)
    }

    /// Build without validation, for drafts and for re-reading stored bills.
    pub fn build_unchecked(self) -> Result<Booking, GodownError> {
        let customer = self
            .customer
            .ok_or_else(|| GodownError::Builder("customer is required".into()))?;

        if self.items.len() > 10_000 {
            return Err(GodownError::Builder(
                "a booking cannot have more than 10,000 lines".into(),
            ));
        }

        let totals = calc::calculate_totals(&self.items, &self.charges);
        Ok(Booking {
            bill_number: self.bill_number,
            date: self.date,
            kind: self.kind,
            seller: self.seller,
            customer,
            items: self.items,
            charges: self.charges,
            totals: Some(totals),
            notes: self.notes,
        })
    }
}

/// Builder for Party (seller/customer).
pub struct PartyBuilder {
    name: String,
    address: Option<String>,
    city: Option<String>,
    state_code: Option<String>,
    gstin: Option<String>,
    mobile: Option<String>,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            city: None,
            state_code: None,
            gstin: None,
            mobile: None,
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn state_code(mut self, code: impl Into<String>) -> Self {
        self.state_code = Some(code.into());
        self
    }

    /// GSTIN, upper-cased and trimmed.
    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = Some(gstin.into().trim().to_uppercase());
        self
    }

    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            address: self.address,
            city: self.city,
            state_code: self.state_code,
            gstin: self.gstin,
            mobile: self.mobile,
        }
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    product_id: String,
    product_name: String,
    brand: String,
    cases: u32,
    per_case: u32,
    rate_per_box: Decimal,
    discount_percent: Decimal,
    godown: Option<String>,
}

impl LineItemBuilder {
    /// Counts of zero are raised to 1, like form input.
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        cases: u32,
        per_case: u32,
        rate_per_box: Decimal,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            brand: String::new(),
            cases: cases.max(1),
            per_case: per_case.max(1),
            rate_per_box,
            discount_percent: Decimal::ZERO,
            godown: None,
        }
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn discount(mut self, percent: Decimal) -> Self {
        self.discount_percent = percent;
        self
    }

    /// Tag the line with the short code of the godown it ships from.
    pub fn godown(mut self, short_code: impl Into<String>) -> Self {
        self.godown = Some(short_code.into());
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            product_id: self.product_id,
            product_name: self.product_name,
            brand: self.brand,
            cases: self.cases,
            per_case: self.per_case,
            rate_per_box: self.rate_per_box,
            discount_percent: self.discount_percent,
            godown: self.godown,
        }
    }
}
