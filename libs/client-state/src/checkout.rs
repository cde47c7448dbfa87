//! WhatsApp checkout handoff
//!
//! After order submission the client opens a pre-filled WhatsApp message to
//! the shop's admin summarizing the order. The contact number comes from the
//! stored `admin_whatsapp` setting, falling back to the shop default when the
//! setting is absent. The handoff is built even when order persistence
//! failed, so the admin can follow up manually.

use rust_decimal::Decimal;

/// Fallback contact number when the `admin_whatsapp` setting is missing
pub const DEFAULT_ADMIN_WHATSAPP: &str = "6281234567890";

/// One summarized line of an order
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub product_name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderLine {
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Everything the WhatsApp message needs
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub notes: Option<String>,
}

impl OrderSummary {
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    /// Render the plain-text message body
    pub fn message(&self) -> String {
        let mut message = String::from("New Nucless order\n\nItems:\n");

        for line in &self.lines {
            message.push_str(&format!(
                "- {} x {} = {}\n",
                line.product_name,
                line.quantity,
                format_rupiah(line.subtotal())
            ));
        }

        message.push_str(&format!("\nTotal: {}\n", format_rupiah(self.total())));
        message.push_str(&format!(
            "\nCustomer:\nName: {}\nPhone: {}\nAddress: {}\n",
            self.customer_name, self.customer_phone, self.customer_address
        ));

        if let Some(notes) = &self.notes {
            message.push_str(&format!("Notes: {}\n", notes));
        }

        message
    }
}

/// Resolve the admin contact number from the stored setting value
pub fn contact_number(setting_value: Option<&str>) -> &str {
    match setting_value {
        Some(value) if !value.trim().is_empty() => value,
        _ => DEFAULT_ADMIN_WHATSAPP,
    }
}

/// Build the `wa.me` URL carrying the order summary
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, percent_encode(message))
}

/// Format an amount as Indonesian rupiah with dot thousand separators
///
/// Amounts are whole-rupiah: fractions round to the nearest rupiah, matching
/// how the shop displays prices.
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round();
    let digits = rounded.abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if rounded.is_sign_negative() {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Percent-encode a query value, keeping unreserved characters
fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn summary() -> OrderSummary {
        OrderSummary {
            lines: vec![
                OrderLine {
                    product_name: "Nucless Galon 19L".to_string(),
                    quantity: 2,
                    price: dec!(15000),
                },
                OrderLine {
                    product_name: "Nucless Botol 600ml".to_string(),
                    quantity: 3,
                    price: dec!(5000),
                },
            ],
            customer_name: "John Doe".to_string(),
            customer_phone: "08123456789".to_string(),
            customer_address: "Jl. Test No. 123, Jakarta".to_string(),
            notes: Some("Deliver in the morning".to_string()),
        }
    }

    #[test]
    fn test_total_sums_line_subtotals() {
        assert_eq!(summary().total(), dec!(45000));
    }

    #[test]
    fn test_format_rupiah_groups_thousands() {
        assert_eq!(format_rupiah(dec!(0)), "Rp 0");
        assert_eq!(format_rupiah(dec!(500)), "Rp 500");
        assert_eq!(format_rupiah(dec!(15000)), "Rp 15.000");
        assert_eq!(format_rupiah(dec!(1250000)), "Rp 1.250.000");
        assert_eq!(format_rupiah(dec!(15000.49)), "Rp 15.000");
    }

    #[test]
    fn test_message_lists_items_and_customer() {
        let message = summary().message();
        assert!(message.contains("- Nucless Galon 19L x 2 = Rp 30.000"));
        assert!(message.contains("- Nucless Botol 600ml x 3 = Rp 15.000"));
        assert!(message.contains("Total: Rp 45.000"));
        assert!(message.contains("Name: John Doe"));
        assert!(message.contains("Notes: Deliver in the morning"));
    }

    #[test]
    fn test_message_omits_absent_notes() {
        let mut summary = summary();
        summary.notes = None;
        assert!(!summary.message().contains("Notes:"));
    }

    #[test]
    fn test_contact_number_falls_back_to_default() {
        assert_eq!(contact_number(Some("6289876543210")), "6289876543210");
        assert_eq!(contact_number(Some("  ")), DEFAULT_ADMIN_WHATSAPP);
        assert_eq!(contact_number(None), DEFAULT_ADMIN_WHATSAPP);
    }

    #[test]
    fn test_whatsapp_url_encodes_the_message() {
        let url = whatsapp_url(DEFAULT_ADMIN_WHATSAPP, "Total: Rp 45.000\n");
        assert!(url.starts_with("https://wa.me/6281234567890?text="));
        assert!(url.contains("Total%3A%20Rp%2045.000%0A"));
        assert!(!url.contains(' '));
    }
}
