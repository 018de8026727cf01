//! Built-in template pools. Purchase has no pool and uses the fallback.

use crate::domain::value_objects::ErpModule;

pub(super) const FALLBACK_QUERY: &str = "How do I process {transaction} in {module}?";
pub(super) const FALLBACK_RESPONSE: &str =
    "Transaction processed successfully. Reference ID: {ref_id}";

pub(super) fn queries(module: ErpModule) -> &'static [&'static str] {
    match module {
        ErpModule::Sales => &[
            "How do I generate a sales invoice for customer {customer}?",
            "What is the status of sales order {order_id}?",
            "How can I check the pending payments for {customer}?",
            "Can you provide the sales report for {period}?",
            "How do I process a return for invoice {invoice_id}?",
        ],
        ErpModule::Gst => &[
            "How do I file GSTR-1 for period {period}?",
            "What is the ITC amount available for {period}?",
            "How can I generate e-way bill for invoice {invoice_id}?",
            "What are the GST filing deadlines for {period}?",
            "How do I reconcile GST mismatches for {period}?",
        ],
        ErpModule::Finance => &[
            "How do I reconcile bank statement for {bank}?",
            "What is the current outstanding amount for {vendor}?",
            "How can I generate financial reports for {period}?",
            "What is the status of payment for invoice {invoice_id}?",
            "How do I process a credit note for {vendor}?",
        ],
        ErpModule::Inventory => &[
            "What is the current stock level for item {item_id}?",
            "How do I issue stock for production order {order_id}?",
            "Can you provide the stock aging report for {period}?",
            "How do I transfer stock from {location1} to {location2}?",
            "What is the reorder level for item {item_id}?",
        ],
        ErpModule::Hr => &[
            "How do I process payroll for {period}?",
            "What is the leave balance for employee {employee_id}?",
            "Can you generate the attendance report for {period}?",
            "How do I update employee details for {employee_id}?",
            "What is the status of recruitment for position {position_id}?",
        ],
        ErpModule::Purchase => &[],
    }
}

pub(super) fn responses(module: ErpModule) -> &'static [&'static str] {
    match module {
        ErpModule::Sales => &[
            "Sales invoice {inv_id} has been generated for {customer}. Total amount: ₹{amount}",
            "Sales order {order_id} status: {status}. Expected delivery: {date}",
            "Pending payment for {customer}: ₹{amount}. Due date: {date}",
            "Sales report for {period} has been generated. Total sales: ₹{amount}",
            "Return processed for invoice {invoice_id}. Credit note {credit_note_id} issued.",
        ],
        ErpModule::Gst => &[
            "GSTR-1 for {period} has been filed successfully. ARN: {arn}",
            "Available ITC for {period}: ₹{amount}. Utilized: ₹{utilized}",
            "E-way bill {ewb_id} generated for invoice {invoice_id}. Valid till: {date}",
            "GST filing deadlines for {period}: GSTR-1 by {gstr1_date}, GSTR-3B by {gstr3b_date}",
            "GST mismatches for {period} have been reconciled. {count} discrepancies resolved.",
        ],
        ErpModule::Finance => &[
            "Bank reconciliation completed for {bank}. {count} transactions matched",
            "Outstanding amount for {vendor}: ₹{amount}. Due date: {date}",
            "Financial reports for {period} have been generated and saved",
            "Payment status for invoice {invoice_id}: {status}. Amount: ₹{amount}",
            "Credit note {credit_note_id} processed for {vendor}. Amount: ₹{amount}",
        ],
        ErpModule::Inventory => &[
            "Current stock level for item {item_id}: {quantity} units",
            "Stock issued for production order {order_id}. Quantity: {quantity}",
            "Stock aging report for {period} has been generated. Total value: ₹{amount}",
            "Stock transferred from {location1} to {location2}. Quantity: {quantity}",
            "Reorder level for item {item_id}: {quantity} units",
        ],
        ErpModule::Hr => &[
            "Payroll for {period} has been processed. Total amount: ₹{amount}",
            "Leave balance for employee {employee_id}: {leave_balance} days",
            "Attendance report for {period} has been generated. Total working days: {days}",
            "Employee details for {employee_id} have been updated successfully",
            "Recruitment status for position {position_id}: {status}",
        ],
        ErpModule::Purchase => &[],
    }
}
