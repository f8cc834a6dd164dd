//! # Message Bundles
//!
//! Every customer-facing label, looked up by key and locale. Nothing else in
//! the workspace branches on the locale to pick a string.
//!
//! ## Usage
//! ```rust
//! use quote_core::{Locale, PlanKind};
//! use quote_export::i18n::{text, MessageKey};
//!
//! assert_eq!(text(MessageKey::QuotationTitle, Locale::Vi), "BÁO GIÁ");
//! assert_eq!(text(MessageKey::QuotationTitle, Locale::En), "QUOTATION");
//! ```

use quote_core::{Locale, PlanKind};

/// Keys of the message bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Document header
    QuotationTitle,
    QuoteNumber,
    Date,
    ValidUntil,

    // Customer section
    CustomerSection,
    CustomerName,
    Company,
    Address,
    Contact,
    NumberOfStores,

    // Cost section
    CostSection,
    HardwareCost,
    SoftwareCostPerYear,
    InstallationPerStore,
    SetupPerStore,

    // Plan comparison
    ComparisonSection,
    PurchasePlanTitle,
    RentalPlanTitle,
    InitialPayment,
    YearTwo,
    DepositRefundable,
    Monthly,
    Total,
    ExclDeposit,
    BestOption,
    Difference,

    // Cash flow
    SummarySection,
    CashFlowSection,
    DirectPurchase,
    ContractRental,
    Month,
    Now,
    Amount,
    Cumulative,
    DepositNote,

    // Charts
    PaymentChartSection,
    CumulativeChartSection,
    MilestoneInitialPayment,
    MilestoneYearTwo,
    MilestoneContractEnd,

    // Closing
    TermsSection,
}

/// Looks up a label.
pub fn text(key: MessageKey, locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => vietnamese(key),
        Locale::En => english(key),
    }
}

/// Short name of a payment plan, as used in tables and chart legends.
pub fn plan_name(plan: PlanKind, locale: Locale) -> &'static str {
    match plan {
        PlanKind::Purchase => text(MessageKey::DirectPurchase, locale),
        PlanKind::Rental => text(MessageKey::ContractRental, locale),
    }
}

/// Terms & conditions printed at the end of every quotation.
pub fn terms(locale: Locale, validity_days: i64) -> Vec<String> {
    match locale {
        Locale::Vi => vec![
            "Thuê: Yêu cầu đặt cọc 3 tháng (hoàn trả khi kết thúc hợp đồng)".to_string(),
            "Mua: Bảo hành phần cứng 1 năm".to_string(),
            "Cam kết dịch vụ: Phản hồi trong 48 giờ".to_string(),
            "Chi phí bổ sung có thể áp dụng cho các sự cố do khách hàng gây ra".to_string(),
            format!("Báo giá có hiệu lực trong {} ngày", validity_days),
            "Giá đã bao gồm VAT và các chi phí liên quan".to_string(),
        ],
        Locale::En => vec![
            "Rental: 3-month deposit required (refundable at contract end)".to_string(),
            "Purchase: 1-year hardware warranty included".to_string(),
            "Service commitment: 48-hour response time".to_string(),
            "Additional costs may apply for customer-caused issues".to_string(),
            format!("Quote valid for {} days from issue date", validity_days),
            "All prices include VAT and related costs".to_string(),
        ],
    }
}

fn vietnamese(key: MessageKey) -> &'static str {
    use MessageKey::*;

    match key {
        QuotationTitle => "BÁO GIÁ",
        QuoteNumber => "Số báo giá",
        Date => "Ngày",
        ValidUntil => "Hiệu lực đến",

        CustomerSection => "THÔNG TIN KHÁCH HÀNG",
        CustomerName => "Tên khách hàng",
        Company => "Công ty",
        Address => "Địa chỉ",
        Contact => "Liên hệ",
        NumberOfStores => "Số lượng cửa hàng",

        CostSection => "CHI TIẾT CHI PHÍ",
        HardwareCost => "Chi phí phần cứng",
        SoftwareCostPerYear => "Chi phí phần mềm (mỗi năm)",
        InstallationPerStore => "Chi phí lắp đặt (mỗi cửa hàng)",
        SetupPerStore => "Dịch vụ thiết lập (mỗi cửa hàng)",

        ComparisonSection => "SO SÁNH PHƯƠNG THỨC THANH TOÁN",
        PurchasePlanTitle => "MUA TRẢ THẲNG",
        RentalPlanTitle => "THUÊ HỢP ĐỒNG 2 NĂM",
        InitialPayment => "Thanh toán ban đầu",
        YearTwo => "Năm thứ 2",
        DepositRefundable => "Đặt cọc (hoàn trả)",
        Monthly => "Hàng tháng",
        Total => "Tổng cộng",
        ExclDeposit => "(không bao gồm cọc)",
        BestOption => "Phương án tốt nhất",
        Difference => "Chênh lệch",

        SummarySection => "TÓM TẮT DÒNG TIỀN 24 THÁNG",
        CashFlowSection => "DÒNG TIỀN CHI TIẾT 24 THÁNG",
        DirectPurchase => "Mua trả thẳng",
        ContractRental => "Thuê hợp đồng",
        Month => "Tháng",
        Now => "Hiện tại",
        Amount => "Số tiền",
        Cumulative => "Tích lũy",
        DepositNote => {
            "Tiền đặt cọc 3 tháng (hiển thị ở tháng 0 của phương án thuê) sẽ được hoàn trả khi kết thúc hợp đồng và không tính vào tổng chi phí 2 năm."
        }

        PaymentChartSection => "BIỂU ĐỒ THANH TOÁN HÀNG THÁNG",
        CumulativeChartSection => "BIỂU ĐỒ DÒNG TIỀN TÍCH LŨY",
        MilestoneInitialPayment => "Thanh toán ban đầu",
        MilestoneYearTwo => "Năm thứ 2 bắt đầu",
        MilestoneContractEnd => "Kết thúc hợp đồng",

        TermsSection => "ĐIỀU KHOẢN & ĐIỀU KIỆN",
    }
}

fn english(key: MessageKey) -> &'static str {
    use MessageKey::*;

    match key {
        QuotationTitle => "QUOTATION",
        QuoteNumber => "Quote Number",
        Date => "Date",
        ValidUntil => "Valid Until",

        CustomerSection => "CUSTOMER INFORMATION",
        CustomerName => "Customer Name",
        Company => "Company",
        Address => "Address",
        Contact => "Contact",
        NumberOfStores => "Number of Stores",

        CostSection => "COST BREAKDOWN",
        HardwareCost => "Hardware Cost",
        SoftwareCostPerYear => "Software Cost (per year)",
        InstallationPerStore => "Installation Cost (per store)",
        SetupPerStore => "Setup Service (per store)",

        ComparisonSection => "PAYMENT METHOD COMPARISON",
        PurchasePlanTitle => "DIRECT PURCHASE",
        RentalPlanTitle => "2-YEAR CONTRACT RENTAL",
        InitialPayment => "Initial Payment",
        YearTwo => "Year 2",
        DepositRefundable => "Deposit (refundable)",
        Monthly => "Monthly",
        Total => "Total",
        ExclDeposit => "(excl. deposit)",
        BestOption => "Best Option",
        Difference => "Difference",

        SummarySection => "24-MONTH CASH FLOW SUMMARY",
        CashFlowSection => "DETAILED 24-MONTH CASH FLOW",
        DirectPurchase => "Direct Purchase",
        ContractRental => "Contract Rental",
        Month => "Month",
        Now => "Now",
        Amount => "Amount",
        Cumulative => "Cumulative",
        DepositNote => {
            "The 3-month deposit (shown at month 0 for rental option) is refundable at contract end and is not included in the total 2-year cost."
        }

        PaymentChartSection => "MONTHLY PAYMENT CHART",
        CumulativeChartSection => "CUMULATIVE CASH FLOW CHART",
        MilestoneInitialPayment => "Initial payment",
        MilestoneYearTwo => "Year 2 begins",
        MilestoneContractEnd => "Contract end",

        TermsSection => "TERMS & CONDITIONS",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_labels() {
        assert_eq!(text(MessageKey::DirectPurchase, Locale::Vi), "Mua trả thẳng");
        assert_eq!(text(MessageKey::ContractRental, Locale::En), "Contract Rental");
        assert_eq!(plan_name(PlanKind::Rental, Locale::Vi), "Thuê hợp đồng");
    }

    #[test]
    fn test_terms_mention_validity_window() {
        assert_eq!(terms(Locale::Vi, 30).len(), terms(Locale::En, 30).len());
        assert!(terms(Locale::En, 30)[0].starts_with("Rental: 3-month deposit"));
        assert_eq!(terms(Locale::En, 45)[4], "Quote valid for 45 days from issue date");
        assert_eq!(terms(Locale::Vi, 30)[4], "Báo giá có hiệu lực trong 30 ngày");
    }
}
