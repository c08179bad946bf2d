//! robots.txt generation.

use crate::sitemap::robots_url_for;

/// A group of user agents that share one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentGroup {
    /// Comment line written above the group.
    pub comment: String,
    pub agents: Vec<String>,
    /// `Allow: /` when true, `Disallow: /` otherwise.
    pub allow: bool,
}

/// The crawl policy written to robots.txt.
///
/// Everything is allowed by default; `disallow` and `blocked_query_patterns` carve out
/// exceptions, and `agent_groups` override the default for named crawlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
    pub site_name: String,
    pub crawl_delay: u32,
    pub disallow: Vec<String>,
    pub allow: Vec<String>,
    pub blocked_query_patterns: Vec<String>,
    pub agent_groups: Vec<AgentGroup>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Default for RobotsPolicy {
    fn default() -> Self {
        Self {
            site_name: "Nexxt Group".to_string(),
            crawl_delay: 1,
            disallow: strings(&["/admin/", "/api/", "/.env", "/config/", "/node_modules/", "/src/"]),
            allow: strings(&["/images/", "/css/", "/js/", "/fonts/"]),
            blocked_query_patterns: strings(&["/*?utm_*", "/*?ref=*", "/*?source=*"]),
            agent_groups: vec![
                AgentGroup {
                    comment: "Major search engines - no restrictions".to_string(),
                    agents: strings(&["Googlebot", "Bingbot", "Slurp", "DuckDuckBot"]),
                    allow: true,
                },
                AgentGroup {
                    comment: "Social media crawlers".to_string(),
                    agents: strings(&["facebookexternalhit", "Twitterbot", "LinkedInBot"]),
                    allow: true,
                },
                AgentGroup {
                    comment: "Block problematic bots".to_string(),
                    agents: strings(&["AhrefsBot", "MJ12bot", "SemrushBot", "DotBot"]),
                    allow: false,
                },
            ],
        }
    }
}

impl RobotsPolicy {
    /// Renders the policy, pointing crawlers at `sitemap_url`.
    pub fn render(&self, sitemap_url: &str) -> String {
        let mut lines: Vec<String> = vec![
            format!("# Robots.txt for {}", self.site_name),
            format!("# {}", robots_url_for(sitemap_url)),
            String::new(),
            "User-agent: *".to_string(),
            "Allow: /".to_string(),
            String::new(),
            "# Sitemap location".to_string(),
            format!("Sitemap: {}", sitemap_url),
            String::new(),
            "# Crawl-delay for respectful crawling".to_string(),
            format!("Crawl-delay: {}", self.crawl_delay),
            String::new(),
            "# Block access to sensitive areas".to_string(),
        ];
        lines.extend(self.disallow.iter().map(|p| format!("Disallow: {}", p)));

        lines.push(String::new());
        lines.push("# Allow access to important assets".to_string());
        lines.extend(self.allow.iter().map(|p| format!("Allow: {}", p)));

        lines.push(String::new());
        lines.push("# Block common bot traps".to_string());
        lines.extend(self.blocked_query_patterns.iter().map(|p| format!("Disallow: {}", p)));

        for group in &self.agent_groups {
            lines.push(String::new());
            lines.push(format!("# {}", group.comment));
            let rule = if group.allow { "Allow: /" } else { "Disallow: /" };
            for (i, agent) in group.agents.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                lines.push(format!("User-agent: {}", agent));
                lines.push(rule.to_string());
            }
        }

        let mut robots = lines.join("\n");
        robots.push('\n');
        robots
    }
}

/// Renders the default crawl policy, pointing crawlers at `sitemap_url`.
pub fn build_robots_txt(sitemap_url: &str) -> String {
    RobotsPolicy::default().render(sitemap_url)
}
