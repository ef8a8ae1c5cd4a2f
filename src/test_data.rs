#[cfg(test)]
use std::fs;
#[cfg(test)]
use std::path::Path;

#[cfg(test)]
pub const POST_DATA: &str = "<!--How to highlight keywords in a code block-->
<!--tools javascript-->
<div id='content-title'>
<h1>Write A Simple Syntax Highlighter</h1>
<p id='content-date'>Mar. 5, 2023, Sunday</p>
</div>
<div id='content-wrapper'>
<p>Keywords are wrapped in spans, see <a href=\"{{root_path}}/index.html\">home</a>.</p>
</div>
";

#[cfg(test)]
pub const POST_DATA_LONG_OVERVIEW: &str = "
<!--Drawing a wireframe only needs the vertices and faces of a model, and an .OBJ file lists exactly those two things, one per line, which keeps parsing simple.-->

<!--graphics-->
<h1>Make A 3D-Model Wireframe Viewer</h1>
<p id='content-date'>Jan. 2, 2024, Tuesday</p>
<div id='content-wrapper'>
<p>Parse, project, draw.</p>
</div>
";

#[cfg(test)]
pub const HEAD_FRAGMENT: &str = "<head>
<title>{{page_title}}</title>
{{#style_files}}<link rel=\"stylesheet\" href=\"{{href}}\">
{{/style_files}}</head>";

#[cfg(test)]
pub const NAVBAR_FRAGMENT: &str = "<nav><a href=\"{{root_path}}/index.html\">Home</a><a href=\"{{root_path}}/blog/index.html\">Blog</a></nav>";

#[cfg(test)]
pub const FOOTER_FRAGMENT: &str = "<footer>Made by hand</footer>";

#[cfg(test)]
pub const CARD_FRAGMENT: &str = "<a class=\"card\" href=\"{{link}}\"><h3>{{title}}</h3><p>{{text}}</p><span>{{additional_text}}</span></a>\n";

#[cfg(test)]
pub const INDEX_BODY: &str = "<div id=\"projects\">{{{project_cards}}}</div>
<div id=\"tools\">{{{tool_cards}}}</div>
<div id=\"posts\">{{{post_cards}}}</div>";

#[cfg(test)]
pub const BLOG_INDEX_BODY: &str = "<ul id=\"post-list\">
{{#posts}}<li><a href=\"{{link}}\">{{title}}</a> <span>{{date}}</span> <em>{{tags}}</em><p>{{overview}}</p></li>
{{/posts}}</ul>";

#[cfg(test)]
pub fn make_post(title: &str, date: &str, overview: &str) -> String {
    format!("<!--{}-->
<!--notes-->
<h1>{}</h1>
<p id='content-date'>{}</p>
<div id='content-wrapper'>
<p>Body of {}</p>
</div>
", overview, title, date, title)
}

/// Lays out a complete site source under `root`, using the default directory names.
#[cfg(test)]
pub fn write_test_site(root: &Path, posts: &[(&str, String)]) {
    let components = root.join("components");
    let blog = root.join("pages").join("blog");
    let styles = root.join("styles");
    let assets = root.join("static").join("img");
    for dir in [&components, &blog, &styles, &assets] {
        fs::create_dir_all(dir).unwrap();
    }

    fs::write(components.join("head.html"), HEAD_FRAGMENT).unwrap();
    fs::write(components.join("navbar.html"), NAVBAR_FRAGMENT).unwrap();
    fs::write(components.join("footer.html"), FOOTER_FRAGMENT).unwrap();
    fs::write(components.join("cardDiv.html"), CARD_FRAGMENT).unwrap();
    fs::write(root.join("pages").join("index.html"), INDEX_BODY).unwrap();
    fs::write(blog.join("index.html"), BLOG_INDEX_BODY).unwrap();

    fs::write(styles.join("toplevel.css"), "body { margin: 0; }\n").unwrap();
    fs::write(root.join("static").join("favicon.ico"), [0u8, 1, 2, 3]).unwrap();
    fs::write(assets.join("logo.svg"), "<svg></svg>").unwrap();

    for (file_name, content) in posts {
        fs::write(blog.join(file_name), content).unwrap();
    }
}
