/// Status given to a lease when it is created.
pub const SEWA_STATUS_ACTIVE: &str = "active";

/// Payment method recorded when the client does not name one.
pub const DEFAULT_PAYMENT_METHOD: &str = "midtrans";

str_enum!(
    InvoiceStatus {
        Unpaid => "unpaid",
        Paid => "paid",
    }
);

str_enum!(
    PaymentStatus {
        Pending => "pending",
        Paid => "paid",
        Failed => "failed",
    }
);
