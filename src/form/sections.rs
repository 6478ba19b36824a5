//! Declarative section schemas for both content documents
//!
//! Every editable content block is described here as data: its scalar
//! fields (with defaults and widget kinds), its repeated-item lists
//! (with seed items, append templates and minimum sizes), and the
//! fixed fields injected at save time. The privacy policy and service
//! terms pages share one descriptor-driven generator instead of
//! per-section code.

use serde_yaml::{Mapping, Value};

use crate::error::{Result, unknown_section};
use crate::form::schema::{FieldSchema, RecordField};
use crate::store::{AUTH, LANDING};

/// Schema of one repeated-item list
#[derive(Debug, Clone)]
pub struct ListSchema {
    /// Path of the list within its section (e.g. `list_item`, `plans`)
    pub key: String,

    /// Display label for the list as a whole
    pub label: String,

    /// Display label for one item ("Item", "Plan", "Q&A", ...)
    pub item_label: String,

    /// Smallest size remove-last may leave behind
    pub min_size: usize,

    pub item: ItemKind,

    /// Items seeded when the document has no list yet
    pub seed: Vec<Value>,

    /// Item appended by the add operation
    pub template: Value,
}

/// Shape of one list item
#[derive(Debug, Clone)]
pub enum ItemKind {
    /// Uniform record with named fields, possibly nested lists
    Record {
        fields: Vec<RecordField>,
        sublists: Vec<ListSchema>,
    },
    /// Plain string items (e.g. per-plan feature lines)
    Scalar,
}

/// Schema of one content section
#[derive(Debug, Clone)]
pub struct SectionSchema {
    /// Document the section belongs to (`landing` or `auth`)
    pub doc: &'static str,

    /// Section key within the document
    pub key: &'static str,

    /// Display title
    pub title: &'static str,

    /// Scalar fields
    pub fields: Vec<RecordField>,

    /// Repeated-item lists
    pub lists: Vec<ListSchema>,

    /// Fixed fields injected at save time, not user-editable
    pub fixed: Vec<(String, Value)>,

    /// Fixed fields injected only while a gate path is truthy,
    /// removed otherwise: (path, value, gate)
    pub fixed_when: Vec<(String, Value, String)>,
}

/// Descriptor for one structurally uniform policy section
#[derive(Debug, Clone, Copy)]
pub struct PolicySection {
    pub key: &'static str,
    pub default_title: &'static str,
    pub has_content: bool,
    pub has_intro: bool,
    pub has_list_items: bool,
}

/// Privacy policy page structure
pub const PRIVACY_SECTIONS: &[PolicySection] = &[
    PolicySection {
        key: "section1",
        default_title: "Information We Collect",
        has_content: false,
        has_intro: true,
        has_list_items: true,
    },
    PolicySection {
        key: "section2",
        default_title: "How We Use Your Information",
        has_content: false,
        has_intro: true,
        has_list_items: true,
    },
    PolicySection {
        key: "section3",
        default_title: "Data Storage and Security",
        has_content: true,
        has_intro: false,
        has_list_items: false,
    },
    PolicySection {
        key: "section4",
        default_title: "Third-Party Services",
        has_content: true,
        has_intro: false,
        has_list_items: false,
    },
    PolicySection {
        key: "section5",
        default_title: "Your Rights",
        has_content: false,
        has_intro: true,
        has_list_items: true,
    },
    PolicySection {
        key: "section6",
        default_title: "Contact Us",
        has_content: true,
        has_intro: false,
        has_list_items: false,
    },
];

/// Terms of service page structure
pub const TERMS_SECTIONS: &[PolicySection] = &[
    PolicySection {
        key: "section1",
        default_title: "Acceptance of Terms",
        has_content: true,
        has_intro: false,
        has_list_items: false,
    },
    PolicySection {
        key: "section2",
        default_title: "Use of Service",
        has_content: false,
        has_intro: true,
        has_list_items: true,
    },
    PolicySection {
        key: "section3",
        default_title: "Subscriptions and Payments",
        has_content: false,
        has_intro: true,
        has_list_items: true,
    },
    PolicySection {
        key: "section4",
        default_title: "Limitation of Liability",
        has_content: true,
        has_intro: false,
        has_list_items: false,
    },
    PolicySection {
        key: "section5",
        default_title: "Changes to These Terms",
        has_content: true,
        has_intro: false,
        has_list_items: false,
    },
];

fn s(v: &str) -> Value {
    Value::String(v.to_string())
}

fn record(pairs: &[(&str, Value)]) -> Value {
    let mut map = Mapping::new();
    for (key, value) in pairs {
        map.insert(s(key), value.clone());
    }
    Value::Mapping(map)
}

fn hero() -> SectionSchema {
    SectionSchema {
        doc: LANDING,
        key: "hero",
        title: "Hero Section",
        fields: vec![
            RecordField::new(
                FieldSchema::text_area(
                    "heading",
                    "Heading Text",
                    "Easily Create Lightweight Software Services<br>Micro SaaS",
                )
                .with_help("Use <br> for line breaks"),
            ),
            RecordField::new(FieldSchema::text("cta_button.text", "Button Text", "Try Now")),
            RecordField::new(FieldSchema::text("video.source", "Video Source URL", ""))
                .omit_when_empty(),
        ],
        lists: vec![],
        fixed: vec![
            ("section_id".into(), s("home")),
            ("cta_button.link".into(), s("/app")),
            ("cta_button.icon".into(), s("bi bi-chevron-right")),
        ],
        fixed_when: vec![("video.type".into(), s("video/mp4"), "video.source".into())],
    }
}

fn feature() -> SectionSchema {
    let item = record(&[
        ("column_width", s("4")),
        ("icon_url", s("")),
        ("icon_alt", s("")),
        ("title", s("")),
        ("description", s("")),
    ]);

    SectionSchema {
        doc: LANDING,
        key: "feature",
        title: "Features Section",
        fields: vec![
            RecordField::new(FieldSchema::text("title", "Title", "Service Features")),
            RecordField::new(FieldSchema::text(
                "subtitle",
                "Subtitle",
                "Integrated Professional Tools, All-in-One Solution",
            )),
        ],
        lists: vec![ListSchema {
            key: "list_item".into(),
            label: "Feature Items".into(),
            item_label: "Item".into(),
            min_size: 1,
            item: ItemKind::Record {
                fields: vec![
                    RecordField::new(FieldSchema::choice(
                        "column_width",
                        "Column Width",
                        "4",
                        &["4", "5", "6", "7", "8"],
                    )),
                    RecordField::new(FieldSchema::text("icon_url", "Icon URL", "")),
                    RecordField::new(FieldSchema::text("icon_alt", "Icon Alt Text", "")),
                    RecordField::new(FieldSchema::text("title", "Title", "")),
                    RecordField::new(FieldSchema::text_area("description", "Description", "")),
                ],
                sublists: vec![],
            },
            seed: vec![item.clone()],
            template: item,
        }],
        fixed: vec![("section_id".into(), s("feature"))],
        fixed_when: vec![],
    }
}

fn demo() -> SectionSchema {
    SectionSchema {
        doc: LANDING,
        key: "demo",
        title: "Demo Experience",
        fields: vec![
            RecordField::new(
                FieldSchema::text_area("heading", "Heading", "Streamlit+ AI Powered<br>Quick Generator")
                    .with_help("Use <br> for line breaks"),
            ),
            RecordField::new(FieldSchema::text(
                "main_title",
                "Main Title",
                "Focus on developing your Streamlit app, leave membership management and payment processing to us!",
            )),
            RecordField::new(FieldSchema::text(
                "image.src",
                "Image Source",
                "app/static/cycles.webp",
            )),
        ],
        lists: vec![
            ListSchema {
                key: "benefits".into(),
                label: "Benefits".into(),
                item_label: "Benefit".into(),
                min_size: 1,
                item: ItemKind::Record {
                    fields: vec![
                        RecordField::new(
                            FieldSchema::text("icon_class", "Icon Class", "fas fa-robot")
                                .with_help("Use Font Awesome icon classes, e.g., fas fa-robot"),
                        ),
                        RecordField::new(FieldSchema::text("title", "Title", "")),
                        RecordField::new(FieldSchema::text_area("description", "Description", "")),
                    ],
                    sublists: vec![],
                },
                seed: vec![record(&[
                    ("icon_class", s("fas fa-robot")),
                    ("title", s("")),
                    ("description", s("")),
                ])],
                template: record(&[
                    ("icon_class", s("fas fa-star")),
                    ("title", s("")),
                    ("description", s("")),
                ]),
            },
            ListSchema {
                key: "cta_buttons".into(),
                label: "CTA Buttons".into(),
                item_label: "Button".into(),
                min_size: 1,
                item: ItemKind::Record {
                    fields: vec![
                        RecordField::new(
                            FieldSchema::text("class", "CSS Class", "cta-button white")
                                .with_help("CSS class for the button, e.g., cta-button white"),
                        ),
                        RecordField::new(FieldSchema::text("link", "Link", "/app")),
                        RecordField::new(FieldSchema::text("text", "Button Text", "")),
                        RecordField::new(
                            FieldSchema::text("icon", "Icon (Optional)", "")
                                .with_help("Use Bootstrap Icons classes, e.g., bi bi-magic"),
                        )
                        .omit_when_empty(),
                    ],
                    sublists: vec![],
                },
                seed: vec![record(&[
                    ("class", s("cta-button white")),
                    ("link", s("/app")),
                    ("icon", s("bi bi-magic")),
                    ("text", s("Try AI Generator")),
                ])],
                template: record(&[
                    ("class", s("cta-button-class")),
                    ("link", s("/app")),
                    ("text", s("New Button")),
                ]),
            },
        ],
        fixed: vec![
            ("section_id".into(), s("demo")),
            ("image.height".into(), s("1028")),
            ("image.width".into(), s("2168")),
        ],
        fixed_when: vec![],
    }
}

fn pricing() -> SectionSchema {
    let seed_plan = {
        let mut map = Mapping::new();
        map.insert(s("name"), s("Free Plan"));
        map.insert(s("is_popular"), Value::Bool(false));
        map.insert(s("price"), s("$0"));
        map.insert(s("price_period"), s("/month"));
        map.insert(s("ai_quota"), s("1 AI generation per month"));
        map.insert(
            s("features"),
            Value::Sequence(vec![
                s("Basic layout templates"),
                s("Social sharing features"),
                s("Basic code optimization"),
            ]),
        );
        map.insert(
            s("button"),
            record(&[
                ("link", s("https://www.patreon.com/c/3droid/membership")),
                ("class", s("btn btn-outline w-100")),
                ("text", s("Get Started")),
            ]),
        );
        Value::Mapping(map)
    };

    let template_plan = {
        let mut map = Mapping::new();
        map.insert(s("name"), s("New Plan"));
        map.insert(s("is_popular"), Value::Bool(false));
        map.insert(s("price"), s("$0"));
        map.insert(s("price_period"), s("/month"));
        map.insert(s("ai_quota"), s("AI generation quota per month"));
        map.insert(
            s("features"),
            Value::Sequence(vec![s("Feature 1"), s("Feature 2")]),
        );
        map.insert(
            s("button"),
            record(&[
                ("link", s("#")),
                ("class", s("btn btn-outline w-100")),
                ("text", s("Select Plan")),
            ]),
        );
        Value::Mapping(map)
    };

    SectionSchema {
        doc: LANDING,
        key: "pricing",
        title: "Pricing Plans",
        fields: vec![RecordField::new(FieldSchema::text(
            "title",
            "Title",
            "Choose Your Plan",
        ))],
        lists: vec![ListSchema {
            key: "plans".into(),
            label: "Plan Items".into(),
            item_label: "Plan".into(),
            min_size: 1,
            item: ItemKind::Record {
                fields: vec![
                    RecordField::new(FieldSchema::text("name", "Plan Name", "")),
                    RecordField::new(FieldSchema::checkbox("is_popular", "Is Popular Plan", false)),
                    RecordField::new(FieldSchema::text("price", "Price", "$0")),
                    RecordField::new(FieldSchema::text("price_period", "Price Period", "/month")),
                    RecordField::new(FieldSchema::text(
                        "ai_quota",
                        "AI Quota",
                        "1 AI generation per month",
                    )),
                    RecordField::new(FieldSchema::text("button.link", "Button Link", "")),
                    RecordField::new(
                        FieldSchema::text("button.class", "Button CSS Class", "btn btn-outline w-100")
                            .with_help("CSS class for the button, e.g., btn btn-outline w-100"),
                    ),
                    RecordField::new(FieldSchema::text("button.text", "Button Text", "Get Started")),
                    RecordField::new(FieldSchema::text(
                        "popular_badge_text",
                        "Popular Badge Text",
                        "Most Popular",
                    ))
                    .when("is_popular"),
                ],
                sublists: vec![ListSchema {
                    key: "features".into(),
                    label: "Features List".into(),
                    item_label: "Feature".into(),
                    min_size: 1,
                    item: ItemKind::Scalar,
                    seed: vec![s("")],
                    template: s(""),
                }],
            },
            seed: vec![seed_plan],
            template: template_plan,
        }],
        fixed: vec![
            ("section_id".into(), s("pricing")),
            ("feature_icon".into(), s("fas fa-check")),
        ],
        fixed_when: vec![],
    }
}

fn faq() -> SectionSchema {
    SectionSchema {
        doc: LANDING,
        key: "faq",
        title: "FAQ",
        fields: vec![RecordField::new(FieldSchema::text(
            "title",
            "Title",
            "Frequently Asked Questions",
        ))],
        lists: vec![ListSchema {
            key: "faq_items".into(),
            label: "FAQ Items".into(),
            item_label: "Q&A".into(),
            min_size: 1,
            item: ItemKind::Record {
                fields: vec![
                    RecordField::new(FieldSchema::text("question", "Question", "")),
                    RecordField::new(FieldSchema::text_area("answer", "Answer", "")),
                ],
                sublists: vec![],
            },
            seed: vec![record(&[
                ("question", s("Question?")),
                ("answer", s("Answer...")),
            ])],
            template: record(&[("question", s("")), ("answer", s(""))]),
        }],
        fixed: vec![],
        fixed_when: vec![],
    }
}

fn footer() -> SectionSchema {
    SectionSchema {
        doc: AUTH,
        key: "footer",
        title: "Footer Settings",
        fields: vec![
            RecordField::new(FieldSchema::text("logo.src", "Logo Image Source", "")),
            RecordField::new(FieldSchema::text(
                "logo.alt",
                "Logo Alt Text",
                "3Droid Financial Technology",
            )),
        ],
        lists: vec![ListSchema {
            key: "social_links".into(),
            label: "Social Links".into(),
            item_label: "Link".into(),
            min_size: 0,
            item: ItemKind::Record {
                fields: vec![
                    RecordField::new(FieldSchema::text("name", "Platform Name", "")),
                    RecordField::new(FieldSchema::text("url", "Link URL", "")),
                    RecordField::new(FieldSchema::text("icon", "Icon Code", "")),
                ],
                sublists: vec![],
            },
            seed: vec![],
            template: record(&[("name", s("")), ("url", s("")), ("icon", s(""))]),
        }],
        fixed: vec![],
        fixed_when: vec![],
    }
}

fn login() -> SectionSchema {
    SectionSchema {
        doc: AUTH,
        key: "login",
        title: "Login Prompt",
        fields: vec![
            RecordField::new(FieldSchema::text("heading", "Heading", "Welcome Back")),
            RecordField::new(FieldSchema::text(
                "subtitle",
                "Subtitle",
                "Sign in to continue building",
            )),
            RecordField::new(FieldSchema::text("cta_text", "Button Text", "Sign In")),
        ],
        lists: vec![],
        fixed: vec![],
        fixed_when: vec![],
    }
}

fn navbar() -> SectionSchema {
    SectionSchema {
        doc: AUTH,
        key: "navbar",
        title: "Navigation Bar",
        fields: vec![
            RecordField::new(FieldSchema::text("brand.text", "Brand Text", "3Droid")),
            RecordField::new(FieldSchema::text("brand.link", "Brand Link", "/")),
            RecordField::new(
                FieldSchema::text("variables.username", "Username Display", "{{username}}")
                    .with_help("Literal text, or a {{variable}} resolved from runtime session info"),
            ),
            RecordField::new(
                FieldSchema::text("variables.plan", "Plan Display", "{{plan}}")
                    .with_help("Literal text, or a {{variable}} resolved from runtime session info"),
            ),
            RecordField::new(
                FieldSchema::text("variables.credits", "Credits Display", "{{credits}}")
                    .with_help("Literal text, or a {{variable}} resolved from runtime session info"),
            ),
        ],
        lists: vec![],
        fixed: vec![],
        fixed_when: vec![],
    }
}

/// Build a policy page schema from its descriptor list
fn policy_schema(
    key: &'static str,
    title: &'static str,
    default_title: &str,
    descriptors: &[PolicySection],
) -> SectionSchema {
    let mut fields = vec![
        RecordField::new(FieldSchema::text("title", "Page Title", default_title)),
        RecordField::new(FieldSchema::text("updated_date", "Last Updated", "")),
    ];
    let mut lists = Vec::new();

    for section in descriptors {
        fields.push(RecordField::new(FieldSchema::text(
            format!("{}.title", section.key),
            format!("[{}] Title", section.key),
            section.default_title,
        )));
        if section.has_intro {
            fields.push(RecordField::new(FieldSchema::text_area(
                format!("{}.intro", section.key),
                format!("[{}] Intro", section.key),
                "",
            )));
        }
        if section.has_content {
            fields.push(RecordField::new(FieldSchema::text_area(
                format!("{}.content", section.key),
                format!("[{}] Content", section.key),
                "",
            )));
        }
        if section.has_list_items {
            lists.push(ListSchema {
                key: format!("{}.items", section.key),
                label: format!("[{}] Items", section.key),
                item_label: "Item".into(),
                min_size: 1,
                item: ItemKind::Scalar,
                seed: vec![s("")],
                template: s(""),
            });
        }
    }

    SectionSchema {
        doc: AUTH,
        key,
        title,
        fields,
        lists,
        fixed: vec![],
        fixed_when: vec![],
    }
}

/// Sections of the landing document, in display order
pub fn landing_sections() -> Vec<SectionSchema> {
    vec![hero(), feature(), demo(), pricing(), faq()]
}

/// Sections of the auth document, in display order
pub fn auth_sections() -> Vec<SectionSchema> {
    vec![
        footer(),
        login(),
        policy_schema(
            "privacy_policy",
            "Privacy Policy",
            "Privacy Policy",
            PRIVACY_SECTIONS,
        ),
        policy_schema(
            "terms_of_service",
            "Terms of Service",
            "Terms of Service",
            TERMS_SECTIONS,
        ),
        navbar(),
    ]
}

/// Every section of every document
pub fn all_sections() -> Vec<SectionSchema> {
    let mut sections = landing_sections();
    sections.extend(auth_sections());
    sections
}

/// Look up a section schema by key
pub fn find_section(name: &str) -> Result<SectionSchema> {
    all_sections()
        .into_iter()
        .find(|section| section.key == name)
        .ok_or_else(|| unknown_section(name))
}
