//! HR - Employees, payroll, roles, access, leave and attendance

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{last_two_years, last_year, period_of, CollectionSpec, Synthesize};
use crate::domain::services::sampler::round2;
use crate::domain::services::Sampler;

const DEPARTMENTS: &[&str] = &[
    "HR",
    "Finance",
    "IT",
    "Sales",
    "Marketing",
    "Operations",
    "Production",
    "Quality",
    "R&D",
];
const DESIGNATIONS: &[&str] = &[
    "Manager",
    "Senior Executive",
    "Executive",
    "Associate",
    "Trainee",
    "Director",
    "Head",
];
const PERMISSIONS: &[&str] = &[
    "View", "Create", "Edit", "Delete", "Approve", "Reject", "Export", "Import", "Print", "Share",
    "Admin",
];
const LEAVE_TYPES: &[&str] = &[
    "Annual",
    "Sick",
    "Maternity",
    "Paternity",
    "Bereavement",
    "Unpaid",
    "Other",
];

pub fn collections() -> Vec<CollectionSpec> {
    vec![
        CollectionSpec::of::<Employee>("employee_records", 500),
        CollectionSpec::of::<PayrollDetail>("payroll_details", 500),
        CollectionSpec::of::<RolePermission>("role_permissions", 20),
        CollectionSpec::of::<UserAccess>("user_access", 500),
        CollectionSpec::of::<PayrollRun>("payroll_processing", 100),
        CollectionSpec::of::<LeaveRequest>("leave_management", 1000),
        CollectionSpec::of::<Attendance>("employee_attendance", 5000),
        CollectionSpec::of::<PayrollReport>("payroll_reports", 100),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub address: String,
    pub department: String,
    pub designation: String,
    pub join_date: DateTime<Utc>,
    pub employment_type: String,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for Employee {
    fn synthesize(s: &mut Sampler) -> Self {
        let join_date = s.days_ago(5 * 365);
        Self {
            employee_id: s.code("EMP", 6),
            first_name: s.first_name(),
            last_name: s.last_name(),
            email: s.email(),
            phone: s.phone(),
            date_of_birth: s.date_of_birth(18, 60),
            gender: s.choice_str(&["Male", "Female", "Other"]),
            address: s.address(),
            department: s.choice_str(DEPARTMENTS),
            designation: s.choice_str(DESIGNATIONS),
            join_date,
            employment_type: s.choice_str(&["Full Time", "Part Time", "Contract", "Temporary"]),
            status: s.choice_str(&["Active", "On Leave", "Terminated", "Resigned"]),
            created_date: join_date,
            last_updated: {
                let now = s.now();
                s.between(join_date, now)
            },
        }
    }
}

/// Monthly pay slip. `hra` and `da` are fractions of basic and
/// `net_salary = basic + hra + da + allowances - deductions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayrollDetail {
    pub payroll_id: String,
    pub employee_id: String,
    pub payroll_date: DateTime<Utc>,
    pub basic_salary: f64,
    pub hra: f64,
    pub da: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub net_salary: f64,
    pub payment_status: String,
    pub payment_mode: String,
    pub bank_account: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for PayrollDetail {
    fn synthesize(s: &mut Sampler) -> Self {
        let payroll_date = last_year(s);
        let basic_salary = s.amount(20_000.0, 100_000.0);
        let hra = round2(basic_salary * s.uniform(0.2, 0.4));
        let da = round2(basic_salary * s.uniform(0.1, 0.2));
        let allowances = s.amount(5_000.0, 20_000.0);
        let deductions = s.amount(5_000.0, 15_000.0);

        Self {
            payroll_id: s.code("PAY", 8),
            employee_id: s.code("EMP", 6),
            payroll_date,
            basic_salary,
            hra,
            da,
            allowances,
            deductions,
            net_salary: round2(basic_salary + hra + da + allowances - deductions),
            payment_status: s.choice_str(&["Pending", "Processed", "Paid", "Failed"]),
            payment_mode: s.choice_str(&["Bank Transfer", "Cheque", "Cash"]),
            bank_account: s.digits(16),
            created_date: payroll_date,
            last_updated: s.plus_days(payroll_date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RolePermission {
    pub role_id: String,
    pub role_name: String,
    pub description: String,
    /// Non-empty, distinct
    pub permissions: Vec<String>,
    pub is_active: bool,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for RolePermission {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            role_id: s.code("ROL", 4),
            role_name: s.choice_str(&[
                "Admin",
                "Manager",
                "Supervisor",
                "Employee",
                "HR Manager",
                "Finance Manager",
                "IT Admin",
                "Sales Manager",
                "Quality Manager",
            ]),
            description: s.text(200),
            permissions: s
                .sample_between(PERMISSIONS, 1, PERMISSIONS.len())
                .into_iter()
                .map(String::from)
                .collect(),
            is_active: s.coin(),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccess {
    pub user_id: String,
    pub employee_id: String,
    pub username: String,
    pub email: String,
    pub role_id: String,
    pub is_active: bool,
    pub last_login: DateTime<Utc>,
    /// Hex-encoded, 64 chars
    pub password_hash: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for UserAccess {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            user_id: s.code("USR", 6),
            employee_id: s.code("EMP", 6),
            username: s.username(),
            email: s.email(),
            role_id: s.code("ROL", 4),
            is_active: s.coin(),
            last_login: last_year(s),
            password_hash: s.hex(64),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayrollRun {
    pub process_id: String,
    pub payroll_month: String,
    pub process_date: DateTime<Utc>,
    pub total_employees: u32,
    pub total_amount: f64,
    pub status: String,
    pub processed_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for PayrollRun {
    fn synthesize(s: &mut Sampler) -> Self {
        let process_date = last_year(s);
        Self {
            process_id: s.code("PRC", 8),
            payroll_month: period_of(process_date),
            process_date,
            total_employees: s.int(100, 500),
            total_amount: s.amount(5_000_000.0, 50_000_000.0),
            status: s.choice_str(&["In Progress", "Completed", "Failed", "Cancelled"]),
            processed_by: s.person(),
            created_date: process_date,
            last_updated: s.plus_days(process_date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequest {
    pub leave_id: String,
    pub employee_id: String,
    pub leave_type: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub days: i64,
    pub reason: String,
    pub status: String,
    pub approved_by: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for LeaveRequest {
    fn synthesize(s: &mut Sampler) -> Self {
        let start_date = last_year(s);
        let days = s.int(1, 30);
        Self {
            leave_id: s.code("LEV", 8),
            employee_id: s.code("EMP", 6),
            leave_type: s.choice_str(LEAVE_TYPES),
            start_date,
            end_date: start_date + chrono::Duration::days(days),
            days,
            reason: s.text(200),
            status: s.choice_str(&["Pending", "Approved", "Rejected", "Cancelled"]),
            approved_by: s.chance(0.7).then(|| s.person()),
            created_date: start_date,
            last_updated: s.plus_days(start_date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attendance {
    pub attendance_id: String,
    pub employee_id: String,
    pub date: DateTime<Utc>,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub status: String,
    pub remarks: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for Attendance {
    fn synthesize(s: &mut Sampler) -> Self {
        let date = last_year(s);
        Self {
            attendance_id: s.code("ATT", 8),
            employee_id: s.code("EMP", 6),
            date,
            check_in: s.at_hour(date, 8, 10),
            check_out: s.at_hour(date, 17, 19),
            status: s.choice_str(&["Present", "Late", "Early Exit", "Half Day", "Absent"]),
            remarks: s.chance(0.3).then(|| s.text(200)),
            created_date: date,
            last_updated: s.plus_days(date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayrollReport {
    pub report_id: String,
    pub report_type: String,
    pub report_period: String,
    pub total_employees: u32,
    pub total_salary: f64,
    pub total_deductions: f64,
    pub net_payment: f64,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for PayrollReport {
    fn synthesize(s: &mut Sampler) -> Self {
        let report_date = last_year(s);
        Self {
            report_id: s.code("PRR", 8),
            report_type: s.choice_str(&[
                "Monthly Payroll",
                "Tax Summary",
                "Deduction Summary",
                "Allowance Summary",
                "Department-wise Summary",
            ]),
            report_period: period_of(report_date),
            total_employees: s.int(100, 500),
            total_salary: s.amount(5_000_000.0, 50_000_000.0),
            total_deductions: s.amount(500_000.0, 5_000_000.0),
            net_payment: s.amount(4_500_000.0, 45_000_000.0),
            created_by: s.person(),
            created_date: report_date,
            last_updated: s.plus_days(report_date, 1, 5),
        }
    }
}
