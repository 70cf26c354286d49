//! HTML document generation.
//!
//! Turns a [`DisplayTree`] plus the full source text into one standalone
//! HTML document: a collapsed "Original Text" section and an expanded
//! interactive tree with per-node toggles and expand/collapse-all
//! controls. Style and script are generated inline; the page makes no
//! external requests.

use std::fmt::Write;

use crate::walker::{DisplayRecord, DisplayTree, RecordRef};

/// Renders one visualization page.
pub struct HtmlRenderer<'a> {
    tree: &'a DisplayTree,
    source_text: &'a str,
    title: &'a str,
}

enum Step {
    Open(RecordRef),
    Close,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(tree: &'a DisplayTree, source_text: &'a str) -> Self {
        HtmlRenderer {
            tree,
            source_text,
            title: "Parse Tree Visualization",
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Generate the complete HTML document.
    pub fn render(&self) -> Result<String, std::fmt::Error> {
        let mut html = String::new();

        self.write_header(&mut html)?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;
        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "<h1>{}</h1>", escape_html(self.title))?;
        writeln!(html, "</div>")?;

        self.write_source_section(&mut html)?;
        self.write_tree_section(&mut html)?;

        writeln!(html, "</div>")?;
        self.write_javascript(&mut html)?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    fn write_header(&self, html: &mut String) -> Result<(), std::fmt::Error> {
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html>")?;
        writeln!(html, "<head>")?;
        writeln!(html, "<meta charset=\"UTF-8\">")?;
        writeln!(html, "<title>{}</title>", escape_html(self.title))?;
        writeln!(html, "<style>")?;
        self.write_css_styles(html)?;
        writeln!(html, "</style>")?;
        writeln!(html, "</head>")?;
        Ok(())
    }

    fn write_css_styles(&self, html: &mut String) -> Result<(), std::fmt::Error> {
        writeln!(
            html,
            r#"
            body {{
                font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
                margin: 0;
                background-color: #1e1e1e;
                color: #ffffff;
                line-height: 1.6;
            }}

            .container {{
                max-width: 1600px;
                margin: 0 auto;
                padding: 32px 40px;
            }}

            .header {{
                text-align: center;
                margin-bottom: 48px;
            }}

            h1 {{
                color: #569cd6;
                font-family: monospace;
            }}

            .section {{
                background: #2d2d30;
                border: 1px solid rgba(255,255,255,0.2);
                border-radius: 8px;
                margin-bottom: 16px;
                overflow: hidden;
            }}

            .section-header {{
                padding: 16px 20px;
                border-bottom: 1px solid rgba(255,255,255,0.2);
                display: flex;
                align-items: center;
                justify-content: space-between;
                cursor: pointer;
                user-select: none;
                background: rgba(0,0,0,0.2);
            }}

            .section-header:hover {{
                background: rgba(86,156,214,0.15);
            }}

            .section-title {{
                font-size: 1.3rem;
                font-weight: 600;
            }}

            .section-toggle {{
                font-size: 1.2rem;
                color: #d4d4d4;
            }}

            .section-content {{
                overflow: hidden;
            }}

            .section-content.collapsed {{
                display: none;
            }}

            .original-text {{
                background: #383838;
                padding: 20px;
                font-family: monospace;
                font-size: 14px;
                white-space: pre-wrap;
                overflow-x: auto;
            }}

            .tree-container {{
                padding: 20px;
                font-family: monospace;
                font-size: 14px;
                background: #383838;
            }}

            .tree-controls {{
                display: flex;
                gap: 12px;
                margin-bottom: 20px;
            }}

            .btn {{
                background: #1e1e1e;
                border: 1px solid rgba(255,255,255,0.2);
                color: #ffffff;
                padding: 6px 12px;
                border-radius: 4px;
                font-size: 12px;
                cursor: pointer;
                font-family: inherit;
            }}

            .btn:hover {{
                background: #569cd6;
                color: #1e1e1e;
            }}

            .tree-node {{
                margin: 3px 0;
                padding: 4px 6px;
                border-radius: 4px;
            }}

            .tree-node:hover {{
                background: rgba(86,156,214,0.1);
            }}

            .tree-toggle {{
                display: inline-block;
                width: 18px;
                text-align: center;
                color: #569cd6;
                cursor: pointer;
                user-select: none;
                font-weight: bold;
            }}

            .tree-element {{
                color: #ce9178;
                font-weight: bold;
            }}

            .tree-position {{
                color: #d4d4d4;
                font-size: 12px;
            }}

            .tree-content {{
                color: #dcdcaa;
                font-style: italic;
                margin-left: 8px;
            }}

            .tree-children {{
                margin-left: 16px;
                border-left: 1px solid rgba(255,255,255,0.2);
                padding-left: 12px;
            }}

            .tree-children.collapsed {{
                display: none;
            }}

            .leaf-icon {{
                color: #6a9955;
                margin-right: 4px;
            }}
        "#
        )?;
        Ok(())
    }

    fn write_javascript(&self, html: &mut String) -> Result<(), std::fmt::Error> {
        writeln!(html, "<script>")?;
        writeln!(
            html,
            r#"
            function toggleSection(sectionId) {{
                const section = document.getElementById(sectionId);
                const toggle = document.getElementById(sectionId.replace('-section', '-toggle'));

                if (section.classList.contains('collapsed')) {{
                    section.classList.remove('collapsed');
                    toggle.textContent = '▼';
                }} else {{
                    section.classList.add('collapsed');
                    toggle.textContent = '▶';
                }}
            }}

            function toggleNode(nodeId) {{
                const element = document.getElementById(nodeId);
                const toggle = element.previousElementSibling.querySelector('.tree-toggle');

                if (element.classList.contains('collapsed')) {{
                    element.classList.remove('collapsed');
                    toggle.textContent = '▼';
                }} else {{
                    element.classList.add('collapsed');
                    toggle.textContent = '▶';
                }}
            }}

            function expandAll() {{
                document.querySelectorAll('.tree-children.collapsed').forEach(el => {{
                    el.classList.remove('collapsed');
                }});
                document.querySelectorAll('.tree-toggle').forEach(toggle => {{
                    toggle.textContent = '▼';
                }});
            }}

            function collapseAll() {{
                document.querySelectorAll('.tree-children').forEach(el => {{
                    el.classList.add('collapsed');
                }});
                document.querySelectorAll('.tree-toggle').forEach(toggle => {{
                    toggle.textContent = '▶';
                }});
            }}
        "#
        )?;
        writeln!(html, "</script>")?;
        Ok(())
    }

    fn write_source_section(&self, html: &mut String) -> Result<(), std::fmt::Error> {
        writeln!(html, "<div class=\"section\">")?;
        writeln!(
            html,
            "<div class=\"section-header\" onclick=\"toggleSection('original-section')\">"
        )?;
        writeln!(html, "<div class=\"section-title\">Original Text</div>")?;
        writeln!(
            html,
            "<div class=\"section-toggle\" id=\"original-toggle\">\u{25b6}</div>"
        )?;
        writeln!(html, "</div>")?;
        writeln!(
            html,
            "<div class=\"section-content collapsed\" id=\"original-section\">"
        )?;
        writeln!(
            html,
            "<div class=\"original-text\">{}</div>",
            escape_html(self.source_text)
        )?;
        writeln!(html, "</div>")?;
        writeln!(html, "</div>")?;
        Ok(())
    }

    fn write_tree_section(&self, html: &mut String) -> Result<(), std::fmt::Error> {
        writeln!(html, "<div class=\"section\">")?;
        writeln!(
            html,
            "<div class=\"section-header\" onclick=\"toggleSection('tree-section')\">"
        )?;
        writeln!(html, "<div class=\"section-title\">Interactive Parse Tree</div>")?;
        writeln!(
            html,
            "<div class=\"section-toggle\" id=\"tree-toggle\">\u{25bc}</div>"
        )?;
        writeln!(html, "</div>")?;
        writeln!(html, "<div class=\"section-content\" id=\"tree-section\">")?;
        writeln!(html, "<div class=\"tree-container\">")?;
        writeln!(html, "<div class=\"tree-controls\">")?;
        writeln!(
            html,
            "<button class=\"btn\" onclick=\"expandAll()\">Expand All</button>"
        )?;
        writeln!(
            html,
            "<button class=\"btn\" onclick=\"collapseAll()\">Collapse All</button>"
        )?;
        writeln!(html, "</div>")?;
        self.write_nodes(html)?;
        writeln!(html, "</div>")?;
        writeln!(html, "</div>")?;
        writeln!(html, "</div>")?;
        Ok(())
    }

    /// Emit the nested node markup with an explicit open/close stack, so
    /// deeply nested documents cannot overflow the call stack.
    fn write_nodes(&self, html: &mut String) -> Result<(), std::fmt::Error> {
        let mut stack: Vec<Step> = self.tree.roots().iter().rev().map(|&r| Step::Open(r)).collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Open(record_ref) => {
                    let record = self.tree.get(record_ref);
                    self.write_node_line(html, record)?;
                    if record.has_children() {
                        writeln!(
                            html,
                            "<div id=\"{}\" class=\"tree-children\">",
                            record.id
                        )?;
                        stack.push(Step::Close);
                        for &child in record.children.iter().rev() {
                            stack.push(Step::Open(child));
                        }
                    }
                }
                Step::Close => writeln!(html, "</div>")?,
            }
        }
        Ok(())
    }

    fn write_node_line(&self, html: &mut String, record: &DisplayRecord) -> Result<(), std::fmt::Error> {
        let indent = "&nbsp;&nbsp;".repeat(record.depth);
        writeln!(html, "<div class=\"tree-node\">")?;
        if record.has_children() {
            writeln!(
                html,
                "{}<span class=\"tree-toggle\" onclick=\"toggleNode('{}')\">\u{25bc}</span>",
                indent, record.id
            )?;
        } else {
            writeln!(html, "{}<span class=\"leaf-icon\">\u{251c}\u{2500}</span>", indent)?;
        }
        writeln!(
            html,
            "<span class=\"tree-element\">{}</span>",
            escape_html(&record.kind)
        )?;
        writeln!(
            html,
            "<span class=\"tree-position\">({}~{})</span>",
            record.start, record.end
        )?;
        if !record.preview.is_empty() {
            // The preview was escaped by the walker; quote it verbatim.
            writeln!(
                html,
                "<span class=\"tree-content\">\"{}\"</span>",
                record.preview
            )?;
        }
        writeln!(html, "</div>")?;
        Ok(())
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
