#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Proceed,
    Skip,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableTag {
    pub tag: String,
    pub mode: String,
    pub enabled: bool,
    pub matched: Option<bool>,
    pub reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub behavior: String,
    pub pull_number: Option<u64>,
    pub pull_title: Option<String>,
    pub verdict: RenderableVerdict,
    pub reason: String,
    pub tags: Vec<RenderableTag>,
}
