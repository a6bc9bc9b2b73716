//! Declarative field rules for the account forms. Each screen owns a static
//! [`FormSchema`]; rules run synchronously on every change and again as the
//! gate before any remote call.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Local part, `@`, then two or more non-empty dot-separated domain labels.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// DOM id for the field's input element.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        }
    }
}

/// Form input for a single form session. Never logged.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl CredentialDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Resets every field to its initial empty value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Debug for CredentialDraft {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("CredentialDraft")
            .field("name_len", &self.name.chars().count())
            .field("email_len", &self.email.chars().count())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    Email(&'static str),
    /// Byte-for-byte equality with the password field.
    MatchesPassword(&'static str),
}

impl Rule {
    fn check(&self, value: &str, draft: &CredentialDraft) -> Result<(), &'static str> {
        let passed = match *self {
            Rule::Required(_) => !value.is_empty(),
            Rule::MinLength(min, _) => value.chars().count() >= min,
            Rule::Email(_) => is_valid_email(value),
            Rule::MatchesPassword(_) => value == draft.password,
        };
        if passed { Ok(()) } else { Err(self.message()) }
    }

    fn message(&self) -> &'static str {
        match *self {
            Rule::Required(message)
            | Rule::MinLength(_, message)
            | Rule::Email(message)
            | Rule::MatchesPassword(message) => message,
        }
    }
}

#[derive(Debug)]
pub struct FieldRules {
    pub field: Field,
    pub rules: &'static [Rule],
}

#[derive(Debug)]
pub struct FormSchema {
    pub fields: &'static [FieldRules],
}

impl FormSchema {
    pub fn field_names(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().map(|entry| entry.field)
    }

    /// Returns the first failing rule's message for `field`, or `None` when the
    /// field is valid or not part of this form.
    pub fn validate_field(&self, field: Field, draft: &CredentialDraft) -> Option<&'static str> {
        let entry = self.fields.iter().find(|entry| entry.field == field)?;
        let value = draft.value(field);
        entry
            .rules
            .iter()
            .find_map(|rule| rule.check(value, draft).err())
    }

    pub fn validate(&self, draft: &CredentialDraft) -> ValidationErrors {
        let errors = self
            .field_names()
            .filter_map(|field| {
                self.validate_field(field, draft)
                    .map(|message| (field, message))
            })
            .collect();
        ValidationErrors(errors)
    }
}

pub static SIGN_UP_SCHEMA: FormSchema = FormSchema {
    fields: &[
        FieldRules {
            field: Field::Name,
            rules: &[
                Rule::Required("Name is required"),
                Rule::MinLength(3, "Name is too short"),
            ],
        },
        FieldRules {
            field: Field::Email,
            rules: &[
                Rule::Required("Email is required"),
                Rule::Email("Invalid email"),
            ],
        },
        FieldRules {
            field: Field::Password,
            rules: &[
                Rule::Required("Password is required"),
                Rule::MinLength(6, "Minimum 6 characters"),
            ],
        },
        FieldRules {
            field: Field::ConfirmPassword,
            rules: &[
                Rule::Required("Confirm password is required"),
                Rule::MatchesPassword("Passwords must match"),
            ],
        },
    ],
};

/// Sign-in only checks presence of the password; strength is the signup's job.
pub static SIGN_IN_SCHEMA: FormSchema = FormSchema {
    fields: &[
        FieldRules {
            field: Field::Email,
            rules: &[
                Rule::Required("Email is required"),
                Rule::Email("Invalid email"),
            ],
        },
        FieldRules {
            field: Field::Password,
            rules: &[Rule::Required("Password is required")],
        },
    ],
};

pub static FORGOT_PASSWORD_SCHEMA: FormSchema = FormSchema {
    fields: &[FieldRules {
        field: Field::Email,
        rules: &[
            Rule::Required("Email is required"),
            Rule::Email("Invalid email address"),
        ],
    }],
};

pub static RESET_PASSWORD_SCHEMA: FormSchema = FormSchema {
    fields: &[
        FieldRules {
            field: Field::Password,
            rules: &[
                Rule::Required("New password is required"),
                Rule::MinLength(6, "Password must be at least 6 characters"),
            ],
        },
        FieldRules {
            field: Field::ConfirmPassword,
            rules: &[
                Rule::Required("Confirm your password"),
                Rule::MatchesPassword("Passwords do not match"),
            ],
        },
    ],
};

/// Field errors for one evaluation; a missing entry means the field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

}

pub fn is_valid_email(value: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|regex| regex.is_match(value))
}
