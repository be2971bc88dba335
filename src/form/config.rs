use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    Home,
    Contact,
    Modal,
}

impl FormVariant {
    pub fn slug(self) -> &'static str {
        match self {
            FormVariant::Home => "home",
            FormVariant::Contact => "contact",
            FormVariant::Modal => "modal",
        }
    }

    pub fn from_slug(slug: &str) -> Option<FormVariant> {
        match slug {
            "home" => Some(FormVariant::Home),
            "contact" => Some(FormVariant::Contact),
            "modal" => Some(FormVariant::Modal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea { rows: u8 },
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub fn is_textarea(&self) -> bool {
        matches!(self.kind, FieldKind::TextArea { .. })
    }

    pub fn input_type(&self) -> &'static str {
        match self.kind {
            FieldKind::Text | FieldKind::TextArea { .. } => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
        }
    }

    pub fn rows(&self) -> u8 {
        match self.kind {
            FieldKind::TextArea { rows } => rows,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProgramOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Everything that differs between the site's contact forms.
#[derive(Debug, Clone)]
pub struct ContactFormConfig {
    pub variant: FormVariant,
    pub title: &'static str,
    pub intro: Option<&'static str>,
    pub fields: Vec<FieldSpec>,
    /// Choices for the program select. Empty means no select is rendered.
    pub program_options: Vec<ProgramOption>,
    /// Program tag sent as a hidden field when the form has no select.
    pub fixed_program: Option<&'static str>,
    pub submit_label: &'static str,
    pub loading_label: &'static str,
    pub success_label: &'static str,
    pub error_message: &'static str,
    /// How long a successful form stays in `success` before reverting.
    pub reset_after: Option<Duration>,
}

impl ContactFormConfig {
    pub fn for_variant(variant: FormVariant, modal_reset: Duration) -> Self {
        match variant {
            FormVariant::Home => Self::home(),
            FormVariant::Contact => Self::contact(),
            FormVariant::Modal => Self::modal(modal_reset),
        }
    }

    fn home() -> Self {
        Self {
            variant: FormVariant::Home,
            title: "Send us a message",
            intro: None,
            fields: page_fields(5),
            program_options: vec![
                ProgramOption { value: "certificate", label: "Certificate Program" },
                ProgramOption { value: "diploma", label: "Diploma Program" },
                ProgramOption { value: "degree", label: "Degree Program" },
                ProgramOption { value: "workshop", label: "Workshop" },
                ProgramOption { value: "other", label: "Other Inquiry" },
            ],
            fixed_program: None,
            submit_label: "Submit Application",
            loading_label: "Sending...",
            success_label: "Message Sent Successfully",
            error_message: "Something went wrong. Please try again.",
            reset_after: None,
        }
    }

    fn contact() -> Self {
        Self {
            variant: FormVariant::Contact,
            title: "Send us a message",
            intro: None,
            fields: page_fields(4),
            program_options: vec![
                ProgramOption { value: "academic", label: "Academic Recognition" },
                ProgramOption { value: "skills", label: "Skill & Personality Development" },
                ProgramOption { value: "other", label: "Other Inquiry" },
            ],
            fixed_program: None,
            submit_label: "Submit Application",
            loading_label: "Sending...",
            success_label: "Message Sent Successfully",
            error_message: "Something went wrong. Please try again.",
            reset_after: None,
        }
    }

    fn modal(reset_after: Duration) -> Self {
        Self {
            variant: FormVariant::Modal,
            title: "Get Started Today",
            intro: Some("Fill out the form below and our team will get back to you shortly."),
            fields: vec![
                FieldSpec {
                    name: "name",
                    label: "Full Name",
                    kind: FieldKind::Text,
                    required: true,
                    placeholder: "Enter your full name",
                },
                FieldSpec {
                    name: "email",
                    label: "Email Address",
                    kind: FieldKind::Email,
                    required: true,
                    placeholder: "Enter your email address",
                },
                FieldSpec {
                    name: "phone",
                    label: "Phone Number",
                    kind: FieldKind::Tel,
                    required: false,
                    placeholder: "Enter your phone number (optional)",
                },
                FieldSpec {
                    name: "message",
                    label: "Message",
                    kind: FieldKind::TextArea { rows: 5 },
                    required: true,
                    placeholder: "Tell us about your goals and how we can help...",
                },
            ],
            program_options: Vec::new(),
            fixed_program: Some("modal-inquiry"),
            submit_label: "Submit Enquiry",
            loading_label: "Submitting...",
            success_label: "Message Sent Successfully ✓",
            error_message: "Something went wrong. Please try again.",
            reset_after: Some(reset_after),
        }
    }

    pub fn element_id(&self) -> String {
        format!("contact-form-{}", self.variant.slug())
    }

    pub fn action(&self) -> String {
        format!("/forms/{}", self.variant.slug())
    }

    pub fn has_program_select(&self) -> bool {
        !self.program_options.is_empty()
    }

    /// Where the delayed reset fetches from. The modal closes itself, the
    /// page forms reload an idle copy of themselves.
    pub fn reset_url(&self) -> String {
        match self.variant {
            FormVariant::Modal => "/partials/contact-modal/close".to_string(),
            _ => self.action(),
        }
    }

    pub fn reset_target(&self) -> String {
        match self.variant {
            FormVariant::Modal => "#contact-modal".to_string(),
            _ => format!("#{}", self.element_id()),
        }
    }

    pub fn reset_after_ms(&self) -> Option<u128> {
        self.reset_after.map(|d| d.as_millis())
    }
}

fn page_fields(message_rows: u8) -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            name: "fullName",
            label: "Full Name",
            kind: FieldKind::Text,
            required: true,
            placeholder: "John Doe",
        },
        FieldSpec {
            name: "email",
            label: "Email Address",
            kind: FieldKind::Email,
            required: true,
            placeholder: "john@example.com",
        },
        FieldSpec {
            name: "phone",
            label: "Phone Number",
            kind: FieldKind::Tel,
            required: false,
            placeholder: "+91 97735 09497",
        },
        FieldSpec {
            name: "message",
            label: "Message",
            kind: FieldKind::TextArea { rows: message_rows },
            required: true,
            placeholder: "Tell us about your goals...",
        },
    ]
}
