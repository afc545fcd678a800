//! Form validation demo - every field error at once, with a fallback contact method
//!
//! Run with: cargo run --example form_validation

use accrete::{all, Alternatives, Validated};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum FieldError {
    NameEmpty,
    AgeNotANumber { value: String },
    AgeTooYoung { age: u8, minimum: u8 },
    EmailMissingAt { value: String },
    PhoneTooShort { digits: usize },
}

type Check<T> = Validated<Alternatives<FieldError>, T>;

enum Contact {
    Email(String),
    Phone(String),
}

struct Signup {
    name: String,
    age: u8,
    contact: Contact,
}

struct SignupForm {
    name: &'static str,
    age: &'static str,
    email: &'static str,
    phone: &'static str,
}

fn fail<T>(error: FieldError) -> Check<T> {
    Validated::invalid(Alternatives::single(error))
}

fn validate_name(name: &str) -> Check<String> {
    if name.trim().is_empty() {
        fail(FieldError::NameEmpty)
    } else {
        Validated::valid(name.trim().to_string())
    }
}

fn validate_age(age: &str) -> Check<u8> {
    match age.parse::<u8>() {
        Ok(age) if age >= 18 => Validated::valid(age),
        Ok(age) => fail(FieldError::AgeTooYoung { age, minimum: 18 }),
        Err(_) => fail(FieldError::AgeNotANumber {
            value: age.to_string(),
        }),
    }
}

fn validate_email(email: &str) -> Check<Contact> {
    if email.contains('@') {
        Validated::valid(Contact::Email(email.to_string()))
    } else {
        fail(FieldError::EmailMissingAt {
            value: email.to_string(),
        })
    }
}

fn validate_phone(phone: &str) -> Check<Contact> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits >= 7 {
        Validated::valid(Contact::Phone(phone.to_string()))
    } else {
        fail(FieldError::PhoneTooShort { digits })
    }
}

fn validate(form: &SignupForm) -> Check<Signup> {
    let contact = validate_email(form.email).or_else(|| validate_phone(form.phone));

    all((validate_name(form.name), validate_age(form.age), contact))
        .map(|(name, age, contact)| Signup { name, age, contact })
}

fn report(label: &str, form: &SignupForm) {
    println!("--- {} ---", label);
    match validate(form) {
        Validated::Valid(signup) => {
            let contact = match &signup.contact {
                Contact::Email(email) => format!("email {}", email),
                Contact::Phone(phone) => format!("phone {}", phone),
            };
            println!(
                "accepted: {} (age {}), reachable by {}",
                signup.name, signup.age, contact
            );
        }
        Validated::Invalid(errors) => {
            println!("rejected; ways the form could be fixed:");
            for path in errors.paths() {
                println!("  - {:?}", path);
            }
        }
    }
}

fn main() {
    report(
        "valid via phone",
        &SignupForm {
            name: "Ada",
            age: "36",
            email: "ada.example.com",
            phone: "555-0100",
        },
    );

    report(
        "everything wrong",
        &SignupForm {
            name: " ",
            age: "16",
            email: "nope",
            phone: "12",
        },
    );
}
