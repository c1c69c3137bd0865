use anybadge_core::{Badge, BadgeOptions, BadgeStyle, IdSequence, Thresholds};

fn svg(options: BadgeOptions) -> String {
    Badge::with_sequence(options, &IdSequence::new())
        .unwrap()
        .svg()
        .trim_end()
        .to_string()
}

// ── Insta snapshot tests for representative badges ──────────────────

#[test]
fn snapshot_default_pylint_badge() {
    insta::assert_snapshot!(svg(BadgeOptions::new("pylint", "5")), @r##"
    <?xml version="1.0" encoding="UTF-8"?>
    <svg xmlns="http://www.w3.org/2000/svg" width="61" height="20">
        <linearGradient id="b" x2="0" y2="100%">
            <stop offset="0" stop-color="#bbb" stop-opacity=".1"/>
            <stop offset="1" stop-opacity=".1"/>
        </linearGradient>
        <mask id="anybadge_1">
            <rect width="61" height="20" rx="3" fill="#fff"/>
        </mask>
        <g mask="url(#anybadge_1)">
            <path fill="#555" d="M0 0h44v20H0z"/>
            <path fill="#4c1" d="M44 0h17v20H44z"/>
            <path fill="url(#b)" d="M0 0h61v20H0z"/>
        </g>
        <g fill="#fff" text-anchor="middle" font-family="DejaVu Sans,Verdana,Geneva,sans-serif" font-size="11">
            <text x="23.0" y="15" fill="#010101" fill-opacity=".3">pylint</text>
            <text x="22.0" y="14">pylint</text>
        </g>
        <g fill="#fff" text-anchor="middle" font-family="DejaVu Sans,Verdana,Geneva,sans-serif" font-size="11">
            <text x="53.5" y="15" fill="#010101" fill-opacity=".3">5</text>
            <text x="52.5" y="14">5</text>
        </g>
    </svg>
    "##);
}

#[test]
fn snapshot_gitlab_scoped_badge() {
    let thresholds = Thresholds::from_pairs(["2=red", "4=orange", "8=yellow", "10=green"]).unwrap();
    let options = BadgeOptions::new("pylint", "5")
        .thresholds(thresholds)
        .style(BadgeStyle::GitlabScoped);
    insta::assert_snapshot!(svg(options), @r##"
    <?xml version="1.0" encoding="UTF-8"?>
    <svg xmlns="http://www.w3.org/2000/svg" width="61" height="20">
        <mask id="anybadge_1">
            <rect width="61" height="20" rx="10" fill="#fff"/>
        </mask>
        <g mask="url(#anybadge_1)">
            <path fill="#DFB317" d="M0 0h61v20H0z"/>
            <path fill="#fff" d="M44 2h8a8 8 0 0 1 0 16H44z"/>
            <path fill="#DFB317" fill-opacity=".15" d="M44 2h8a8 8 0 0 1 0 16H44z"/>
        </g>
        <g fill="#fff" text-anchor="middle" font-family="DejaVu Sans,Verdana,Geneva,sans-serif" font-size="11">
            <text x="22.0" y="14">pylint</text>
        </g>
        <g fill="#333" text-anchor="middle" font-family="DejaVu Sans,Verdana,Geneva,sans-serif" font-size="11">
            <text x="52.5" y="14">5</text>
        </g>
        <path fill="none" stroke="#DFB317" stroke-width="2" d="M51 1a9 9 0 0 1 0 18"/>
    </svg>
    "##);
}

#[test]
fn snapshot_custom_template_badge() {
    let template = "<svg width=\"{{ badge width }}\">\n<text>{{ label }}</text><text>{{ value }}</text>\n</svg>";
    let options = BadgeOptions::new("a<b", "1&2").template(template);
    insta::assert_snapshot!(svg(options), @r#"
    <svg width="62">
    <text>a&lt;b</text><text>1&amp;2</text>
    </svg>
    "#);
}
