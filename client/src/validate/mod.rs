//! 提交前的表单校验
//!
//! 所有规则在提交前逐字段评估，错误按字段收集并阻断提交。
//! 后端仍是最终裁决方，这里只做早失败。

use chrono::Utc;
use rust_decimal::Decimal;

use common::constants::{MIN_LOAN_AMOUNT, MIN_MONTHLY_INCOME};
use common::enums::{ApplicationStatus, LoanCategory, LoanStatus, PaymentStatus, UserRole};
use common::models::req::{NewApplication, NewLoan, NewUser};
use common::models::LoanProduct;
use common::{calculate_emi, AppError, AppResult};

/// 单个字段的校验失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

/// 电话号码只允许数字、+、-、空格和括号
fn is_valid_phone(phone: &str) -> bool {
    let trimmed = phone.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
}

/// 粗粒度的邮箱形状检查（a@b.c），严格校验交给身份提供商
fn is_valid_email(email: &str) -> bool {
    let trimmed = email.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

/// 贷款申请表单（原始输入，数值字段提交前才解析）
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub national_id: String,
    pub address: String,
    pub income_source: String,
    pub monthly_income: String,
    pub loan_amount: String,
    pub emi_plan: String,
    pub reason: String,
    pub notes: Option<String>,
    pub agree_terms: bool,
}

impl ApplicationForm {
    /// 对照所申请的产品逐字段校验
    pub fn validate(&self, loan: &LoanProduct) -> Vec<FieldError> {
        let mut errors = Vec::new();

        require(&mut errors, "firstName", &self.first_name, "First name is required");
        require(&mut errors, "lastName", &self.last_name, "Last name is required");

        if !is_valid_phone(&self.phone) {
            errors.push(FieldError::new("phone", "Enter a valid phone number"));
        }

        require(&mut errors, "nationalId", &self.national_id, "National ID is required");
        require(&mut errors, "address", &self.address, "Address is required");
        require(&mut errors, "incomeSource", &self.income_source, "Income source is required");

        match self.monthly_income.trim().parse::<Decimal>() {
            Ok(income) if income >= Decimal::from(MIN_MONTHLY_INCOME) => {}
            _ => errors.push(FieldError::new(
                "monthlyIncome",
                format!("Monthly income must be at least ${}", MIN_MONTHLY_INCOME),
            )),
        }

        match self.loan_amount.trim().parse::<Decimal>() {
            Ok(amount) => {
                if amount < Decimal::from(MIN_LOAN_AMOUNT) {
                    errors.push(FieldError::new(
                        "loanAmount",
                        format!("Loan amount must be at least ${}", MIN_LOAN_AMOUNT),
                    ));
                } else if !loan.allows_amount(amount) {
                    errors.push(FieldError::new(
                        "loanAmount",
                        format!("Loan amount cannot exceed ${}", loan.max_limit),
                    ));
                }
            }
            Err(_) => errors.push(FieldError::new("loanAmount", "Enter a valid loan amount")),
        }

        match self.emi_plan.trim().parse::<u32>() {
            Ok(plan) if loan.allows_plan(plan) => {}
            _ => errors.push(FieldError::new("emiPlan", "Choose one of the offered EMI plans")),
        }

        if self.reason.trim().len() < 20 {
            errors.push(FieldError::new("reason", "Reason must be at least 20 characters"));
        }

        if !self.agree_terms {
            errors.push(FieldError::new("agreeTerms", "You must agree to the terms"));
        }

        errors
    }

    /// 校验通过后组装提交载荷，月供在这里预先算好
    pub fn into_request(
        self,
        loan: &LoanProduct,
        applicant_email: &str,
        applicant_photo: &str,
    ) -> AppResult<NewApplication> {
        let errors = self.validate(loan);
        if let Some(first) = errors.first() {
            return Err(AppError::validation(format!("{}: {}", first.field, first.message)));
        }

        // validate 已保证这两个字段可解析
        let loan_amount = self
            .loan_amount
            .trim()
            .parse::<Decimal>()
            .map_err(|_| AppError::validation("loanAmount: Enter a valid loan amount"))?;
        let emi_plan = self
            .emi_plan
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::validation("emiPlan: Choose one of the offered EMI plans"))?;
        let monthly_income = self
            .monthly_income
            .trim()
            .parse::<Decimal>()
            .map_err(|_| AppError::validation("monthlyIncome: Enter a valid amount"))?;

        Ok(NewApplication {
            loan_id: loan.id.clone(),
            loan_title: loan.title.clone(),
            loan_category: loan.category,
            interest_rate: loan.interest_rate,
            manager_email: loan.manager_email.clone(),
            applicant_name: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            applicant_email: applicant_email.to_string(),
            applicant_photo: applicant_photo.to_string(),
            phone: self.phone.trim().to_string(),
            national_id: self.national_id.trim().to_string(),
            address: self.address.trim().to_string(),
            income_source: self.income_source.trim().to_string(),
            monthly_income,
            loan_amount,
            emi_plan,
            emi_amount: calculate_emi(loan_amount, loan.interest_rate, emi_plan),
            reason: self.reason.trim().to_string(),
            notes: self.notes.filter(|n| !n.trim().is_empty()),
            status: ApplicationStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            applied_at: Utc::now(),
        })
    }
}

/// 注册表单
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub photo_url: String,
    pub role: Option<UserRole>,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        require(&mut errors, "name", &self.name, "Name is required");

        if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "Enter a valid email address"));
        }

        require(&mut errors, "photoURL", &self.photo_url, "Photo URL is required");

        if self.role.is_none() {
            errors.push(FieldError::new("role", "Choose a role"));
        }

        // 至少 6 位且同时包含大小写字母
        let pw = &self.password;
        if pw.len() < 6 {
            errors.push(FieldError::new("password", "Password must be at least 6 characters"));
        } else if !pw.chars().any(|c| c.is_lowercase()) {
            errors.push(FieldError::new("password", "Password needs a lowercase letter"));
        } else if !pw.chars().any(|c| c.is_uppercase()) {
            errors.push(FieldError::new("password", "Password needs an uppercase letter"));
        }

        errors
    }

    /// 校验通过后生成后端建档载荷
    pub fn into_request(self) -> AppResult<NewUser> {
        let errors = self.validate();
        if let Some(first) = errors.first() {
            return Err(AppError::validation(format!("{}: {}", first.field, first.message)));
        }
        Ok(NewUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            photo_url: self.photo_url.trim().to_string(),
            role: self.role.unwrap_or_default(),
        })
    }
}

/// 贷款产品表单（经理端）
#[derive(Debug, Clone, Default)]
pub struct LoanForm {
    pub title: String,
    pub category: Option<LoanCategory>,
    pub interest_rate: String,
    pub max_limit: String,
    pub emi_options: Vec<u32>,
    pub description: String,
    pub requirements: Vec<String>,
    pub image: String,
    pub show_on_home: bool,
}

impl LoanForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        require(&mut errors, "title", &self.title, "Title is required");

        if self.category.is_none() {
            errors.push(FieldError::new("category", "Choose a category"));
        }

        match self.interest_rate.trim().parse::<Decimal>() {
            Ok(rate) if rate >= Decimal::ONE && rate <= Decimal::from(30) => {}
            _ => errors.push(FieldError::new("interestRate", "Interest rate must be between 1 and 30")),
        }

        match self.max_limit.trim().parse::<Decimal>() {
            Ok(limit) if limit >= Decimal::from(MIN_LOAN_AMOUNT) => {}
            _ => errors.push(FieldError::new(
                "maxLimit",
                format!("Maximum limit must be at least ${}", MIN_LOAN_AMOUNT),
            )),
        }

        if self.emi_options.is_empty() {
            errors.push(FieldError::new("emiOptions", "Offer at least one EMI plan"));
        }

        if self.description.trim().len() < 50 {
            errors.push(FieldError::new("description", "Description must be at least 50 characters"));
        }

        require(&mut errors, "image", &self.image, "Image URL is required");

        errors
    }

    /// 校验通过后组装新建产品载荷
    pub fn into_request(
        self,
        manager_email: &str,
        manager_name: Option<String>,
    ) -> AppResult<NewLoan> {
        let errors = self.validate();
        if let Some(first) = errors.first() {
            return Err(AppError::validation(format!("{}: {}", first.field, first.message)));
        }

        let interest_rate = self
            .interest_rate
            .trim()
            .parse::<Decimal>()
            .map_err(|_| AppError::validation("interestRate: Enter a valid rate"))?;
        let max_limit = self
            .max_limit
            .trim()
            .parse::<Decimal>()
            .map_err(|_| AppError::validation("maxLimit: Enter a valid amount"))?;
        let category = self
            .category
            .ok_or_else(|| AppError::validation("category: Choose a category"))?;

        Ok(NewLoan {
            title: self.title.trim().to_string(),
            category,
            interest_rate,
            max_limit,
            emi_options: self.emi_options,
            status: LoanStatus::Active,
            show_on_home: self.show_on_home,
            description: self.description.trim().to_string(),
            requirements: self.requirements,
            image: self.image.trim().to_string(),
            manager_email: manager_email.to_string(),
            manager_name,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_loan() -> LoanProduct {
        let json = serde_json::json!({
            "_id": "loan-1",
            "title": "Small Business Loan",
            "category": "Business",
            "interestRate": "12",
            "maxLimit": "10000",
            "emiOptions": [6, 12, 24],
            "status": "active",
            "showOnHome": true,
            "description": "Working capital for small businesses with flexible repayment terms.",
            "requirements": [],
            "image": "https://example.com/loan.png",
            "managerEmail": "manager@loanlink.com"
        });
        serde_json::from_value(json).unwrap()
    }

    fn valid_application() -> ApplicationForm {
        ApplicationForm {
            first_name: "Amina".into(),
            last_name: "Rahman".into(),
            phone: "+880 1712-345678".into(),
            national_id: "1987654321".into(),
            address: "12 Lake Road, Dhaka".into(),
            income_source: "Retail shop".into(),
            monthly_income: "850".into(),
            loan_amount: "5000".into(),
            emi_plan: "12".into(),
            reason: "Expanding inventory ahead of the festival sales season".into(),
            notes: None,
            agree_terms: true,
        }
    }

    #[test]
    fn test_valid_application_passes() {
        assert!(valid_application().validate(&sample_loan()).is_empty());
    }

    #[test]
    fn test_amount_above_limit_rejected() {
        // 申请 15000，产品上限 10000
        let mut form = valid_application();
        form.loan_amount = "15000".into();
        let errors = form.validate(&sample_loan());
        assert!(errors.iter().any(|e| e.field == "loanAmount"));
    }

    #[test]
    fn test_plan_outside_offering_rejected() {
        let mut form = valid_application();
        form.emi_plan = "18".into();
        let errors = form.validate(&sample_loan());
        assert!(errors.iter().any(|e| e.field == "emiPlan"));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(is_valid_phone("+880 1712-345678"));
        assert!(is_valid_phone("(02) 9876 5432"));
        assert!(!is_valid_phone("call me"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_short_reason_rejected() {
        let mut form = valid_application();
        form.reason = "need money".into();
        let errors = form.validate(&sample_loan());
        assert!(errors.iter().any(|e| e.field == "reason"));
    }

    #[test]
    fn test_request_carries_computed_emi() {
        let loan = sample_loan();
        let req = valid_application()
            .into_request(&loan, "amina@example.com", "https://example.com/a.png")
            .unwrap();
        // P=5000, R=12, N=12 → 444.24
        assert_eq!(req.emi_amount, Decimal::from_str("444.24").unwrap());
        assert_eq!(req.applicant_name, "Amina Rahman");
        assert_eq!(req.status, ApplicationStatus::Pending);
        assert_eq!(req.payment_status, PaymentStatus::Unpaid);
    }

    #[test]
    fn test_password_rules() {
        let mut form = RegisterForm {
            name: "Amina".into(),
            email: "amina@example.com".into(),
            photo_url: "https://example.com/a.png".into(),
            role: Some(UserRole::Borrower),
            password: "Abcdef".into(),
        };
        assert!(form.validate().is_empty());

        form.password = "abc".into();
        assert!(form.validate().iter().any(|e| e.field == "password"));

        form.password = "abcdef".into();
        assert!(form.validate().iter().any(|e| e.field == "password"));

        form.password = "ABCDEF".into();
        assert!(form.validate().iter().any(|e| e.field == "password"));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn test_loan_form_rate_bounds() {
        let mut form = LoanForm {
            title: "Education Loan".into(),
            category: Some(LoanCategory::Education),
            interest_rate: "8".into(),
            max_limit: "20000".into(),
            emi_options: vec![12, 24],
            description: "Tuition support for undergraduate and graduate study programs abroad.".into(),
            requirements: vec![],
            image: "https://example.com/edu.png".into(),
            show_on_home: false,
        };
        assert!(form.validate().is_empty());

        form.interest_rate = "0.5".into();
        assert!(form.validate().iter().any(|e| e.field == "interestRate"));

        form.interest_rate = "31".into();
        assert!(form.validate().iter().any(|e| e.field == "interestRate"));
    }
}
