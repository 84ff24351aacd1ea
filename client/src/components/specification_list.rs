//! Specification list for the item detail card.

#[cfg(test)]
#[path = "specification_list_test.rs"]
mod specification_list_test;

use std::collections::BTreeMap;
use std::fmt;

use leptos::prelude::*;

use crate::util::format::spec_value_text;

/// One rendered `key: value` specification row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecLine {
    pub key: String,
    pub value: String,
}

impl fmt::Display for SpecLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// Every specification pair as display rows, in key order.
pub fn specification_lines(specification: &BTreeMap<String, serde_json::Value>) -> Vec<SpecLine> {
    specification
        .iter()
        .map(|(key, value)| SpecLine { key: key.clone(), value: spec_value_text(value) })
        .collect()
}

/// Bulleted list of specification rows.
#[component]
pub fn SpecificationList(specification: BTreeMap<String, serde_json::Value>) -> impl IntoView {
    let rows = specification_lines(&specification)
        .into_iter()
        .map(|line| {
            view! {
                <li class="spec-list__item">
                    <strong>{format!("{}:", line.key)}</strong>
                    " "
                    {line.value}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="spec-list">
            <h3 class="spec-list__heading">"Specifications:"</h3>
            <ul class="spec-list__items">{rows}</ul>
        </div>
    }
}
