//! Renders a typed field config as the matching input.

use dioxus::prelude::*;

use common::form_field::{FieldConfig, FieldKind, FieldValue};

#[component]
pub fn FormField(config: FieldConfig, value: FieldValue, onchange: Callback<FieldValue>) -> Element {
    let FieldConfig { name, label, placeholder, required, disabled, kind } = config;
    let current = value.single().unwrap_or_default();

    let input = match kind {
        FieldKind::Text { max_len } => rsx! {
            input {
                r#type: "text",
                name: "{name}",
                placeholder: placeholder.unwrap_or_default(),
                maxlength: max_len.map(|len| len.to_string()),
                value: "{current}",
                required,
                disabled,
                oninput: move |event: Event<FormData>| onchange.call(FieldValue::Single(Some(event.value()))),
            }
        },
        FieldKind::Select { options } => {
            let placeholder = placeholder.unwrap_or_else(|| format!("Choose {}", label.to_lowercase()));
            rsx! {
                select {
                    name: "{name}",
                    required,
                    disabled,
                    onchange: move |event: Event<FormData>| onchange.call(FieldValue::Single(Some(event.value()))),
                    option { value: "", selected: current.is_empty(), "{placeholder}" }
                    for opt in options {
                        option {
                            key: "{opt.value}",
                            value: "{opt.value}",
                            selected: opt.value == current,
                            "{opt.label}"
                        }
                    }
                }
            }
        }
        FieldKind::MultiSelect { options, max_selected } => {
            let chosen = value.many().to_vec();
            rsx! {
                div {
                    class: "x-multi-select",
                    for opt in options {
                        label {
                            key: "{opt.value}",
                            input {
                                r#type: "checkbox",
                                name: "{name}",
                                value: "{opt.value}",
                                checked: chosen.contains(&opt.value),
                                disabled,
                                onchange: {
                                    let value = value.clone();
                                    let opt_value = opt.value.clone();
                                    move |_| {
                                        let mut next = value.clone();
                                        next.toggle(&opt_value, max_selected);
                                        onchange.call(next);
                                    }
                                },
                            }
                            "{opt.label}"
                        }
                    }
                }
            }
        }
        FieldKind::Date { min, max } => rsx! {
            input {
                r#type: "date",
                name: "{name}",
                min,
                max,
                value: "{current}",
                required,
                disabled,
                onchange: move |event: Event<FormData>| onchange.call(FieldValue::Single(Some(event.value()))),
            }
        },
        FieldKind::File { accept, multiple } => rsx! {
            input {
                r#type: "file",
                name: "{name}",
                accept: accept.join(","),
                multiple,
                required,
                disabled,
                onchange: move |event: Event<FormData>| onchange.call(FieldValue::Single(Some(event.value()))),
            }
        },
    };

    rsx! {
        label {
            class: "x-form-field",
            span {
                "{label}"
                if required {
                    span { class: "x-required", "*" }
                }
            }
            {input}
        }
    }
}
