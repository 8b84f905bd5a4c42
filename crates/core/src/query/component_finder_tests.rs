// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::component::Component;
use yare::parameterized;

fn components() -> Vec<Component> {
    vec![
        Component::root(1, "org.struts:struts", "Struts"),
        Component::child(2, "org.struts:struts-core", "Struts Core", 1),
        Component::child(3, "org.struts:struts-core:Action.java", "Action.java", 2),
        Component::child(4, "org.struts:struts-core:Filter.java", "Filter.java", 2),
        Component::root(5, "org.apache:commons-lang", "Commons Lang"),
    ]
}

fn keys(result: &ComponentQueryResult<Component>) -> Vec<&str> {
    result.components.iter().map(|c| c.key.as_str()).collect()
}

fn find(query: ComponentQuery) -> ComponentQueryResult<Component> {
    ComponentFinder::new().find(&query, &components()).unwrap()
}

#[test]
fn empty_query_returns_everything_sorted_by_name() {
    let result = find(ComponentQuery::builder().build().unwrap());
    let names: Vec<&str> = result.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Action.java", "Commons Lang", "Filter.java", "Struts", "Struts Core"]
    );
}

#[parameterized(
    exact_case = { "struts-core", 3 },
    upper_case = { "STRUTS-CORE", 3 },
    file = { "action", 1 },
    nothing = { "nowhere", 0 },
)]
fn key_substring_is_case_insensitive(term: &str, expected: usize) {
    let result = find(ComponentQuery::builder().keys([term]).build().unwrap());
    assert_eq!(result.components.len(), expected);
}

#[test]
fn terms_within_a_dimension_are_ored() {
    let result = find(
        ComponentQuery::builder()
            .names(["commons", "filter"])
            .build()
            .unwrap(),
    );
    assert_eq!(
        keys(&result),
        vec!["org.apache:commons-lang", "org.struts:struts-core:Filter.java"]
    );
}

#[test]
fn key_and_name_dimensions_are_anded() {
    let result = find(
        ComponentQuery::builder()
            .keys(["struts"])
            .names(["core"])
            .build()
            .unwrap(),
    );
    assert_eq!(keys(&result), vec!["org.struts:struts-core"]);

    let none = find(
        ComponentQuery::builder()
            .keys(["apache"])
            .names(["core"])
            .build()
            .unwrap(),
    );
    assert!(none.components.is_empty());
}

#[test]
fn no_pagination_returns_all_without_paging() {
    let result = find(
        ComponentQuery::builder()
            .no_pagination()
            .page_index(3)
            .build()
            .unwrap(),
    );
    assert_eq!(result.components.len(), 5);
    assert!(result.paging.is_none());
}

#[test]
fn paging_total_is_filtered_count() {
    let result = find(
        ComponentQuery::builder()
            .keys(["struts"])
            .page_size(2)
            .page_index(1)
            .build()
            .unwrap(),
    );
    let paging = result.paging.unwrap();
    assert_eq!(result.components.len(), 2);
    assert_eq!(paging.total(), 4);
    assert_eq!(paging.pages(), 2);
    assert_eq!(paging.offset(), 0);
}

#[parameterized(
    first = { 1, vec!["Action.java", "Commons Lang"] },
    second = { 2, vec!["Filter.java", "Struts"] },
    last_partial = { 3, vec!["Struts Core"] },
    past_the_end = { 4, vec![] },
)]
fn pages_walk_sorted_results(page_index: usize, expected: Vec<&str>) {
    let result = find(
        ComponentQuery::builder()
            .page_size(2)
            .page_index(page_index)
            .build()
            .unwrap(),
    );
    let names: Vec<&str> = result.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, expected);
    assert_eq!(result.paging.unwrap().total(), 5);
}

#[test]
fn page_deduplicates_by_key() {
    let mut candidates = components();
    candidates.push(candidates[0].clone());
    let query = ComponentQuery::builder()
        .keys(["org.struts:struts"])
        .sort(ComponentSort::Key)
        .page_size(10)
        .build()
        .unwrap();
    let result = ComponentFinder::new().find(&query, &candidates).unwrap();
    assert_eq!(result.components.len(), 4);
    // Total counts the filtered sequence before de-duplication
    assert_eq!(result.paging.unwrap().total(), 5);
}

#[test]
fn sort_by_key_descending() {
    let result = find(
        ComponentQuery::builder()
            .sort(ComponentSort::Key)
            .asc(false)
            .build()
            .unwrap(),
    );
    assert_eq!(keys(&result)[0], "org.struts:struts-core:Filter.java");
    assert_eq!(keys(&result)[4], "org.apache:commons-lang");
}

#[test]
fn custom_ordering_is_stable() {
    let query = ComponentQuery::builder().no_pagination().build().unwrap();
    // Every component compares equal: candidate order must survive
    let result = ComponentFinder::new()
        .find_sorted_by(&query, &components(), &|_: &Component, _: &Component| {
            std::cmp::Ordering::Equal
        })
        .unwrap();
    let ids: Vec<i64> = result.components.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn custom_ordering_by_id_descending() {
    let query = ComponentQuery::builder().no_pagination().build().unwrap();
    let by_id_desc = |a: &Component, b: &Component| b.id.cmp(&a.id);
    let result = ComponentFinder::new()
        .find_sorted_by(&query, &components(), &by_id_desc)
        .unwrap();
    assert_eq!(result.components[0].id, 5);
}

#[parameterized(
    zero_size = { 0, 1 },
    zero_index = { 10, 0 },
)]
fn builder_rejects_zero_values(page_size: usize, page_index: usize) {
    let err = ComponentQuery::builder()
        .page_size(page_size)
        .page_index(page_index)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidQuery(_)));
}

#[test]
fn component_sort_from_str() {
    assert_eq!("NAME".parse::<ComponentSort>().unwrap(), ComponentSort::Name);
    assert_eq!("key".parse::<ComponentSort>().unwrap(), ComponentSort::Key);
    assert!("qualifier".parse::<ComponentSort>().is_err());
}

#[test]
fn query_display_summarizes_paging() {
    let paged = ComponentQuery::builder().page_size(5).page_index(2).build().unwrap();
    assert!(paged.to_string().contains("page=2x5"));
    let all = ComponentQuery::builder().no_pagination().build().unwrap();
    assert!(all.to_string().contains("page=all"));
}

#[test]
fn result_serializes_paging_only_when_paginated() {
    let paged = find(ComponentQuery::builder().page_size(2).build().unwrap());
    let json = serde_json::to_value(&paged).unwrap();
    assert_eq!(json["paging"]["total"], 5);
    assert_eq!(json["components"].as_array().unwrap().len(), 2);

    let all = find(ComponentQuery::builder().no_pagination().build().unwrap());
    let json = serde_json::to_value(&all).unwrap();
    assert!(json.get("paging").is_none());
}
