use crate::builder::{FormBuilder, FormElement};
use crate::error::FormResult;
use devkit_core::FormConfig;
use minijinja::{context, Environment};
use serde::Serialize;

// The .html suffix turns on HTML auto-escaping for every `{{ }}`.
const TEMPLATE_NAME: &str = "form.html";

const FORM_TEMPLATE: &str = r##"<div class="container">
  <div class="title">{{ title }}</div>
  <div class="content">
    <form action="#">
      <div class="user-details">
{%- for el in elements %}
{%- if el.input_type %}
        <div class="input-box">
          <span class="details">{{ el.label }}</span>
          <input type="{{ el.input_type }}" placeholder="Enter {{ el.label }}" required />
        </div>
{%- elif el.kind == "checkbox" %}
        <div class="input-box">
          <label for="{{ el.id }}">
            <input type="checkbox" id="{{ el.id }}" /> {{ el.label }}
          </label>
        </div>
{%- elif el.kind == "radio" %}
        <div class="gender-details">
          <span class="gender-title">{{ el.label }}</span>
          <div class="category">
{%- for option in radio_options %}
            <label for="{{ el.id }}-{{ loop.index }}">
              <input type="radio" name="{{ el.id }}" id="{{ el.id }}-{{ loop.index }}" />
              <span class="option">{{ option }}</span>
            </label>
{%- endfor %}
          </div>
        </div>
{%- elif el.kind == "button" %}
        <div class="button">
          <input type="submit" value="{{ el.label }}" />
        </div>
{%- endif %}
{%- endfor %}
      </div>
    </form>
  </div>
</div>
{%- if include_style %}

<style>
  * { margin: 0; padding: 0; box-sizing: border-box; font-family: sans-serif; }
  .container { max-width: 700px; width: 100%; padding: 25px 30px; border-radius: 5px; }
  .container .title { font-size: 25px; font-weight: 500; }
  .content form .user-details { display: flex; flex-wrap: wrap; justify-content: space-between; margin: 20px 0 12px 0; }
  form .user-details .input-box { margin-bottom: 15px; width: calc(100% / 2 - 20px); }
  .user-details .input-box input { height: 45px; width: 100%; outline: none; border-radius: 5px; border: 1px solid #ccc; padding-left: 15px; }
  form .category { display: flex; width: 80%; margin: 14px 0; justify-content: space-between; }
  form .button { height: 45px; margin: 35px 0; }
  form .button input { height: 100%; width: 100%; border-radius: 5px; border: none; color: #fff; font-size: 18px; font-weight: 500; cursor: pointer; }
</style>
{%- endif %}
"##;

const RADIO_OPTIONS: [&str; 3] = ["Male", "Female", "Prefer not to say"];

#[derive(Serialize)]
struct ElementView<'a> {
    kind: &'static str,
    input_type: Option<&'static str>,
    label: &'a str,
    id: &'a str,
}

impl<'a> From<&'a FormElement> for ElementView<'a> {
    fn from(el: &'a FormElement) -> Self {
        Self {
            kind: el.kind.as_str(),
            input_type: el.kind.input_type(),
            label: &el.label,
            id: &el.id,
        }
    }
}

/// Render the builder's elements to an HTML snippet
pub fn render_form(builder: &FormBuilder, config: &FormConfig) -> FormResult<String> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, FORM_TEMPLATE)?;

    let elements: Vec<ElementView> = builder.elements().iter().map(ElementView::from).collect();
    let tmpl = env.get_template(TEMPLATE_NAME)?;
    let rendered = tmpl.render(context! {
        title => &config.title,
        elements => elements,
        radio_options => RADIO_OPTIONS,
        include_style => config.include_style,
    })?;

    Ok(rendered)
}

impl FormBuilder {
    pub fn render_html(&self, config: &FormConfig) -> FormResult<String> {
        render_form(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ElementKind;

    fn builder() -> FormBuilder {
        FormBuilder::from_spec("input:Full Name\npassword:Secret\ncheckbox:Agree\nradio:Gender\nbutton:Send")
            .unwrap()
    }

    #[test]
    fn test_renders_each_kind() {
        let html = builder().render_html(&FormConfig::default()).unwrap();
        assert!(html.contains(r#"<div class="title">Generated Form</div>"#));
        assert!(html.contains(r#"<input type="text" placeholder="Enter Full Name" required />"#));
        assert!(html.contains(r#"<input type="password" placeholder="Enter Secret" required />"#));
        assert!(html.contains(r#"<input type="checkbox" id="input-2" /> Agree"#));
        assert!(html.contains(r#"id="input-3-1""#));
        assert!(html.contains(r#"id="input-3-3""#));
        assert!(html.contains("Prefer not to say"));
        assert!(html.contains(r#"<input type="submit" value="Send" />"#));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn test_style_can_be_left_out() {
        let config = FormConfig {
            include_style: false,
            title: "Signup".to_string(),
        };
        let html = builder().render_html(&config).unwrap();
        assert!(!html.contains("<style>"));
        assert!(html.contains(r#"<div class="title">Signup</div>"#));
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut builder = FormBuilder::new();
        let id = builder.add(ElementKind::Email);
        builder.set_label(&id, r#"Tom & "Jerry" <b>"#).unwrap();
        let html = builder.render_html(&FormConfig::default()).unwrap();
        assert!(html.contains("Tom &amp; &quot;Jerry&quot; &lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_empty_form() {
        let html = FormBuilder::new()
            .render_html(&FormConfig::default())
            .unwrap();
        assert!(html.contains(r##"<form action="#">"##));
        assert!(!html.contains(r#"class="input-box""#));
    }
}
