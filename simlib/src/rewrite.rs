/// Rewrites absolute cluster paths inside a config blob so the file is
/// usable on the local machine.
///
/// Rules are exact substring substitutions applied in insertion order.
/// Deployments differ only in their rule set, so rules are data.
#[derive(Clone, Debug, Default)]
pub struct PathRewriter {
    rules: Vec<(String, String)>,
}

impl PathRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, origin: impl Into<String>, local: impl Into<String>) -> Self {
        self.rules.push((origin.into(), local.into()));
        self
    }

    pub fn rewrite(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (origin, local) in &self.rules {
            out = out.replace(origin.as_str(), local.as_str());
        }
        out
    }
}
