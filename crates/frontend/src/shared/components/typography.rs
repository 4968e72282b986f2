use leptos::prelude::*;

/// Heading container tags a [`SubTitle`] may render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingTag {
    H1,
    H2,
    #[default]
    H3,
    H4,
    H5,
    H6,
}

/// Append the font size after the caller's style so it wins the cascade,
/// even when the caller set a font-size of its own.
pub fn compose_style(style: &str, font_size: u32) -> String {
    let base = style.trim().trim_end_matches(';').trim_end();
    if base.is_empty() {
        format!("font-size: {}px;", font_size)
    } else {
        format!("{}; font-size: {}px;", base, font_size)
    }
}

/// Text heading with a configurable container tag.
#[component]
pub fn SubTitle(
    /// Container tag, one of h1..h6
    #[prop(optional)]
    tag: HeadingTag,
    /// Forced font size in px, overrides any font-size in `style`
    #[prop(default = 20)]
    font_size: u32,
    /// Inline style for the container
    #[prop(default = String::from("font-weight: 700;"), into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let style = compose_style(&style, font_size);
    let children = children();

    match tag {
        HeadingTag::H1 => view! { <h1 style=style>{children}</h1> }.into_any(),
        HeadingTag::H2 => view! { <h2 style=style>{children}</h2> }.into_any(),
        HeadingTag::H3 => view! { <h3 style=style>{children}</h3> }.into_any(),
        HeadingTag::H4 => view! { <h4 style=style>{children}</h4> }.into_any(),
        HeadingTag::H5 => view! { <h5 style=style>{children}</h5> }.into_any(),
        HeadingTag::H6 => view! { <h6 style=style>{children}</h6> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_style_appends_font_size() {
        assert_eq!(
            compose_style("font-weight: 700;", 20),
            "font-weight: 700; font-size: 20px;"
        );
    }

    #[test]
    fn test_compose_style_empty_base() {
        assert_eq!(compose_style("", 17), "font-size: 17px;");
        assert_eq!(compose_style("   ", 17), "font-size: 17px;");
    }

    #[test]
    fn test_forced_font_size_lands_last() {
        // The caller's font-size stays in the string, the forced one comes
        // after it and therefore wins the CSS cascade.
        let composed = compose_style("font-size: 12px", 20);
        assert_eq!(composed, "font-size: 12px; font-size: 20px;");
        assert!(composed.rfind("font-size: 20px").unwrap() > composed.find("font-size: 12px").unwrap());
    }
}
