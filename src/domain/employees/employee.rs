use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub job_history: Option<String>,
    pub salary: f64,
    pub years_of_experience: i32,
}

#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("employee with id {0} does not exist")]
    NotFound(i64),
    #[error("{0}")]
    Validation(String),
    #[error("no fields provided to update")]
    EmptyUpdate,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Creation payload. All fields except `job_history` are required.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub title: String,
    pub job_history: Option<String>,
    pub salary: f64,
    pub years_of_experience: i32,
}

impl NewEmployee {
    pub fn validate(&self) -> Result<(), EmployeeError> {
        if self.name.trim().is_empty() {
            return Err(EmployeeError::Validation("name must not be empty".into()));
        }
        if self.title.trim().is_empty() {
            return Err(EmployeeError::Validation("title must not be empty".into()));
        }
        if !(self.salary >= 0.0) {
            return Err(EmployeeError::Validation(
                "salary must be greater than or equal to 0".into(),
            ));
        }
        if self.years_of_experience < 0 {
            return Err(EmployeeError::Validation(
                "years_of_experience must be greater than or equal to 0".into(),
            ));
        }
        Ok(())
    }
}

/// Partial update. `None` means "leave the stored value untouched"; there is
/// no way to null out `job_history` through an update, matching create-time
/// optionality.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub job_history: Option<String>,
    pub salary: Option<f64>,
    pub years_of_experience: Option<i32>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.job_history.is_none()
            && self.salary.is_none()
            && self.years_of_experience.is_none()
    }

    pub fn validate(&self) -> Result<(), EmployeeError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(EmployeeError::Validation("name must not be empty".into()));
            }
        }
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(EmployeeError::Validation("title must not be empty".into()));
            }
        }
        if let Some(salary) = self.salary {
            if !(salary >= 0.0) {
                return Err(EmployeeError::Validation(
                    "salary must be greater than or equal to 0".into(),
                ));
            }
        }
        if let Some(yoe) = self.years_of_experience {
            if yoe < 0 {
                return Err(EmployeeError::Validation(
                    "years_of_experience must be greater than or equal to 0".into(),
                ));
            }
        }
        Ok(())
    }

    /// Merge supplied fields into an existing entity.
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(title) = &self.title {
            employee.title = title.clone();
        }
        if let Some(job_history) = &self.job_history {
            employee.job_history = Some(job_history.clone());
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        if let Some(yoe) = self.years_of_experience {
            employee.years_of_experience = yoe;
        }
    }
}

/// Closed set of columns that sorting and filtering may reference. Keeps
/// arbitrary caller strings out of generated SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Id,
    Name,
    Title,
    JobHistory,
    Salary,
    YearsOfExperience,
}

impl EmployeeField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "title" => Some(Self::Title),
            "job_history" => Some(Self::JobHistory),
            "salary" => Some(Self::Salary),
            "years_of_experience" => Some(Self::YearsOfExperience),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Title => "title",
            Self::JobHistory => "job_history",
            Self::Salary => "salary",
            Self::YearsOfExperience => "years_of_experience",
        }
    }
}

/// One ordering key, e.g. `-salary` (descending) or `name` (ascending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: EmployeeField,
    pub descending: bool,
}

impl SortKey {
    pub fn parse(key: &str) -> Result<Self, EmployeeError> {
        let (descending, name) = match key.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, key),
        };
        let field = EmployeeField::parse(name).ok_or_else(|| {
            EmployeeError::Validation(format!("unknown order_by field: {name}"))
        })?;
        Ok(Self { field, descending })
    }
}

/// Default listing order: highest salary first.
pub fn default_order() -> Vec<SortKey> {
    vec![SortKey {
        field: EmployeeField::Salary,
        descending: true,
    }]
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Number(f64),
    Integer(i64),
}

/// Exact-match predicate on a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: EmployeeField,
    pub value: FilterValue,
}

/// Parameters for a listing, combined as limit + ordering + filter
/// conjunction.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub limit: i64,
    pub order_by: Vec<SortKey>,
    pub filters: Vec<FieldFilter>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            order_by: default_order(),
            filters: Vec::new(),
        }
    }
}
