use serde_json::json;
use widgetdoc::renderer::{MiniJinjaRenderer, TemplateRenderer};

#[test]
fn test_field_substitution() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({
        "name": "SearchBox",
        "short_description": "A search input"
    });

    let result = engine
        .render("title: {{ name }}\ndescription: {{ short_description }}", &context)
        .unwrap();
    assert_eq!(result, "title: SearchBox\ndescription: A search input");
}

#[test]
fn test_missing_field_renders_empty() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({ "name": "SearchBox" });

    let result = engine.render("[{{ storybook_link }}]", &context).unwrap();
    assert_eq!(result, "[]");
}

#[test]
fn test_missing_nested_path_renders_empty() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({ "name": "SearchBox" });

    // The whole subtree is absent, including an indexed access into it.
    let result = engine
        .render("[{{ customize.connector.params[0].name }}]", &context)
        .unwrap();
    assert_eq!(result, "[]");
}

#[test]
fn test_attribute_of_missing_section_renders_empty() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({ "name": "SearchBox" });

    // One attribute deep into an absent section must render empty text,
    // not raise an undefined-value error.
    let result = engine.render("[{{ customize.title }}]", &context).unwrap();
    assert_eq!(result, "[]");
}

#[test]
fn test_loop_over_missing_list_renders_nothing() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({ "name": "SearchBox" });

    let result = engine
        .render(
            "{% for snippet in customize.connector.full_example %}{{ snippet.code }}{% endfor %}",
            &context,
        )
        .unwrap();
    assert_eq!(result, "");
}

#[test]
fn test_conditional_picks_matching_branch() {
    let engine = MiniJinjaRenderer::new();
    let template =
        "{% if flavor == 'js' %}JS{% elif flavor == 'react' %}REACT{% elif flavor == 'vue' %}VUE{% endif %}";

    let result = engine.render(template, &json!({ "flavor": "react" })).unwrap();
    assert_eq!(result, "REACT");
}

#[test]
fn test_conditional_without_match_renders_nothing() {
    let engine = MiniJinjaRenderer::new();
    let template = "{% if flavor == 'js' %}JS{% elif flavor == 'react' %}REACT{% endif %}";

    let result = engine.render(template, &json!({ "flavor": "angular" })).unwrap();
    assert_eq!(result, "");
}

#[test]
fn test_length_condition() {
    let engine = MiniJinjaRenderer::new();
    let template = "{% if items|length == 1 %}single{% endif %}";

    let result = engine.render(template, &json!({ "items": ["a"] })).unwrap();
    assert_eq!(result, "single");

    let result = engine.render(template, &json!({ "items": ["a", "b"] })).unwrap();
    assert_eq!(result, "");
}

#[test]
fn test_loop_preserves_list_order() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({
        "parameters": [
            { "name": "first" },
            { "name": "second" },
            { "name": "third" }
        ]
    });

    let result = engine
        .render("{% for p in parameters %}{{ p.name }};{% endfor %}", &context)
        .unwrap();
    assert_eq!(result, "first;second;third;");
}

#[test]
fn test_nested_loops() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({
        "groups": [
            { "name": "g1", "parameters": [{ "name": "a" }, { "name": "b" }] },
            { "name": "g2", "parameters": [{ "name": "c" }] }
        ]
    });

    let result = engine
        .render(
            "{% for g in groups %}{{ g.name }}:[{% for p in g.parameters %}{{ p.name }}{% endfor %}] {% endfor %}",
            &context,
        )
        .unwrap();
    assert_eq!(result, "g1:[ab] g2:[c] ");
}

#[test]
fn test_empty_loop_leaves_no_residue() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({ "parameters": [] });

    let result = engine
        .render("before{% for p in parameters %}{{ p.name }}{% endfor %}after", &context)
        .unwrap();
    assert_eq!(result, "beforeafter");
}

#[test]
fn test_no_escaping_is_applied() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({ "html_output": "<div class=\"ais-SearchBox\">&amp;</div>" });

    let result = engine.render("{{ html_output }}", &context).unwrap();
    assert_eq!(result, "<div class=\"ais-SearchBox\">&amp;</div>");
}

#[test]
fn test_rendering_is_deterministic() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({
        "name": "Menu",
        "flavor": "vue",
        "widget_parameters_groups": [
            { "name": "Options", "parameters": [{ "name": "attribute" }] }
        ]
    });
    let template =
        "{{ name }} {% if flavor == 'vue' %}vue{% endif %} {% for g in widget_parameters_groups %}{{ g.name }}{% endfor %}";

    let first = engine.render(template, &context).unwrap();
    let second = engine.render(template, &context).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unbalanced_block_fails_loudly() {
    let engine = MiniJinjaRenderer::new();

    let result = engine.render("{% if flavor == 'js' %}no end", &json!({}));
    assert!(result.is_err());
}
