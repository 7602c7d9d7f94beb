//! Built-in command templates.

pub(crate) const LIST: &str = r#"{{ "Styles" | style("title") }} {{ ("(" ~ rows | length ~ " of " ~ total ~ ")") | style("muted") }}
{%- for error in errors %}
{{ ("invalid pattern: " ~ error) | style("error") }}
{%- endfor %}
{%- for row in rows %}
{% if row.selected %}{{ "*" | style("selected") }}{% else %} {% endif %} {{ row.group | col(20) | style("group") }} {{ row.simple_name | col(20) | style("name") }} {{ row.font | col(24) | style("font") }} {{ row.size | col(6) | style("number") }} {{ row.line_height | col(8) | style("number") }}
{%- if row.warning %} {{ ("missing " ~ row.warning) | style("warning") }}{% endif %}
{%- endfor %}
{%- if hidden %}
{{ (hidden ~ " hidden by group visibility") | style("muted") }}
{%- endif %}"#;

pub(crate) const GROUPS: &str = r#"{{ "Groups" | style("title") }}
{%- for group in groups %}
{{ (group.path or "(ungrouped)") | col(32) | style("group") }} {{ group.count | col(5) | style("number") }}
{%- if not group.shown %} {{ "hidden" | style("muted") }}{% endif %}
{%- endfor %}"#;

pub(crate) const DUPLICATES: &str = r#"{{ "Duplicates" | style("title") }}
{%- for set in sets %}
{{ set.label | style("font") }}{% if not set.shown %} {{ "hidden" | style("muted") }}{% endif %}
{%- for name in set.names %}
  {{ name | truncate_at(48) | style("name") }}
{%- endfor %}
{%- else %}
{{ "no duplicates" | style("muted") }}
{%- endfor %}"#;

pub(crate) const FONTS: &str = r#"{{ "Fonts" | style("title") }}
{%- for family in families %}
{{ family.family | col(24) | style("font") }} {{ family.styles | join(", ") | style("muted") }}
{%- endfor %}
{%- if missing %}
{{ "Missing" | style("title") }}
{%- for font in missing %}
{{ font.font | col(32) | style("warning") }} {{ ("no " ~ font.reason ~ ", used by " ~ font.used_by) | style("muted") }}
{%- endfor %}
{%- endif %}"#;

pub(crate) const COMMIT: &str = r#"{%- if dry_run %}{{ "Pending changes" | style("title") }}{% else %}{{ "Applied changes" | style("title") }}{% endif %} {{ ("(" ~ touched ~ " touched)") | style("muted") }}
{%- for row in pending %}
{{ row.name | style("name") }}
{%- for write in row.writes %}
  {{ write | style("muted") }}
{%- endfor %}
{%- else %}
{{ "nothing to commit" | style("muted") }}
{%- endfor %}
{%- for note in notes %}
{% if note.level == "error" %}{{ note.message | style("error") }}{% else %}{{ note.message | style("success") }}{% endif %}
{%- endfor %}"#;

pub(crate) const MESSAGE: &str = r#"{{ kind | style("title") }} {{ outcome | style("muted") }}"#;

pub(crate) const ALL: &[(&str, &str)] = &[
    ("list", LIST),
    ("groups", GROUPS),
    ("duplicates", DUPLICATES),
    ("fonts", FONTS),
    ("commit", COMMIT),
    ("message", MESSAGE),
];
