use super::*;

const CONTAINER_STYLE: &str = "border: 1px solid #e0e0e0; border-radius: 8px; overflow: hidden";
const HEADER_STYLE: &str = "padding: 16px; border-bottom: 1px solid #e0e0e0; font-weight: bold";
const CONTENT_STYLE: &str = "padding: 16px";
const FOOTER_STYLE: &str =
    "padding: 16px; border-top: 1px solid #e0e0e0; background-color: #f5f5f5";

/// Structural regions of a card, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardRegion {
    /// Title region.
    Header,
    /// Body region.
    Content,
    /// Optional trailing region.
    Footer,
}

impl CardRegion {
    /// Value of the region's `data-part` marker.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Content => "content",
            Self::Footer => "footer",
        }
    }

    fn style(self) -> &'static str {
        match self {
            Self::Header => HEADER_STYLE,
            Self::Content => CONTENT_STYLE,
            Self::Footer => FOOTER_STYLE,
        }
    }
}

/// Resolved card options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContract {
    title: String,
    width: Option<CardWidth>,
    has_footer: bool,
}

impl CardContract {
    /// Card with a title, no footer, and intrinsic width.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: None,
            has_footer: false,
        }
    }

    /// Sets (or clears) the explicit width.
    pub fn with_width(mut self, width: Option<CardWidth>) -> Self {
        self.width = width;
        self
    }

    /// Records whether a footer payload was supplied.
    pub fn with_footer(mut self, has_footer: bool) -> Self {
        self.has_footer = has_footer;
        self
    }

    /// Header text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Explicit width, if any.
    pub fn width(&self) -> Option<&CardWidth> {
        self.width.as_ref()
    }

    /// Whether the footer region is rendered.
    pub fn has_footer(&self) -> bool {
        self.has_footer
    }

    /// Regions present in the output, in render order.
    pub fn regions(&self) -> Vec<CardRegion> {
        let mut regions = vec![CardRegion::Header, CardRegion::Content];
        if self.has_footer {
            regions.push(CardRegion::Footer);
        }
        regions
    }

    /// Inline style of the container.
    ///
    /// A width whose canonical form is empty adds no declaration.
    pub fn container_style(&self) -> String {
        match self.width.as_ref().map(CardWidth::as_css) {
            Some(width) if !width.is_empty() => format!("width: {width}; {CONTAINER_STYLE}"),
            _ => CONTAINER_STYLE.to_string(),
        }
    }
}

#[component]
/// Card with a title header, a content body, and an optional footer.
///
/// The footer region is rendered only when `footer` is supplied.
pub fn Card(
    /// Header text.
    #[prop(into)]
    title: String,
    /// Trailing actions or notes.
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    /// Explicit container width; numbers are pixels.
    #[prop(optional, into)]
    width: Option<CardWidth>,
    /// Body content.
    children: Children,
) -> impl IntoView {
    let contract = CardContract::new(title)
        .with_width(width)
        .with_footer(footer.is_some());
    let style = contract.container_style();
    let title = contract.title().to_string();

    view! {
        <article
            class="sample-card"
            style=style
            data-ui-primitive="true"
            data-ui-kind="card"
            data-component="card"
        >
            <header
                data-part=CardRegion::Header.marker()
                style=CardRegion::Header.style()
            >
                {title}
            </header>
            <div
                data-part=CardRegion::Content.marker()
                style=CardRegion::Content.style()
            >
                {children()}
            </div>
            {footer.map(|footer| view! {
                <footer
                    data-part=CardRegion::Footer.marker()
                    style=CardRegion::Footer.style()
                >
                    {footer.run()}
                </footer>
            })}
        </article>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn card_without_footer_has_no_footer_region() {
        let contract = CardContract::new("ユーザー情報");
        assert_eq!(contract.title(), "ユーザー情報");
        assert_eq!(
            contract.regions(),
            vec![CardRegion::Header, CardRegion::Content]
        );
        assert!(!contract.has_footer());
    }

    #[test]
    fn supplied_footer_adds_exactly_one_footer_region() {
        let contract = CardContract::new("タイトル").with_footer(true);
        let footers = contract
            .regions()
            .into_iter()
            .filter(|region| *region == CardRegion::Footer)
            .count();
        assert_eq!(footers, 1);
        assert_eq!(contract.regions().last(), Some(&CardRegion::Footer));
    }

    #[test]
    fn region_markers_are_distinct() {
        assert_eq!(CardRegion::Header.marker(), "header");
        assert_eq!(CardRegion::Content.marker(), "content");
        assert_eq!(CardRegion::Footer.marker(), "footer");
    }

    #[test]
    fn width_is_applied_to_the_container_style() {
        let contract = CardContract::new("幅指定").with_width(Some(CardWidth::px(400)));
        assert_eq!(contract.width().map(CardWidth::as_css), Some("400px"));
        assert!(contract.container_style().starts_with("width: 400px;"));

        let relative = CardContract::new("幅指定").with_width(Some(CardWidth::from("50%")));
        assert!(relative.container_style().starts_with("width: 50%;"));
    }

    #[test]
    fn missing_width_leaves_intrinsic_sizing() {
        let contract = CardContract::new("自動");
        assert_eq!(contract.container_style(), CONTAINER_STYLE);
        assert!(!contract.container_style().contains("width"));

        let blank = CardContract::new("自動").with_width(Some(CardWidth::from("")));
        assert_eq!(blank.container_style(), CONTAINER_STYLE);
    }

    #[test]
    fn styles_leave_the_closing_separator_to_the_renderer() {
        let sized = CardContract::new("幅指定").with_width(Some(CardWidth::px(400)));
        assert_eq!(
            sized.container_style(),
            "width: 400px; border: 1px solid #e0e0e0; border-radius: 8px; overflow: hidden"
        );
        let intrinsic = CardContract::new("自動").container_style();
        for style in [
            intrinsic.as_str(),
            CardRegion::Header.style(),
            CardRegion::Content.style(),
            CardRegion::Footer.style(),
        ] {
            assert!(!style.trim_end().ends_with(';'), "style={style:?}");
        }
    }

    #[test]
    fn resolving_the_same_options_twice_is_identical() {
        let build = || {
            CardContract::new("タイトル")
                .with_width(Some(CardWidth::px(320)))
                .with_footer(true)
        };
        assert_eq!(build(), build());
        assert_eq!(build().container_style(), build().container_style());
    }
}
