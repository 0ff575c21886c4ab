use anyhow::Result;

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, query: String, json: bool) -> Result<String> {
        let use_case = self.container.ask_use_case();
        let result = use_case.execute(&query).await;

        if json {
            Ok(serde_json::to_string_pretty(&result)?)
        } else {
            Ok(result.display_text())
        }
    }
}
