// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::collections::HashMap;

use serde::Deserialize;

/// Source of localized strings for level names and descriptions.
pub trait ResourceBundle {
    fn name(&self) -> &str;
    fn get_string(&self, key: &str) -> Option<&str>;
}

/// In-memory bundle, usually loaded from a flat JSON object of key/value
/// pairs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StringTable {
    #[serde(skip)]
    name: String,
    #[serde(flatten)]
    strings: HashMap<String, String>,
}

impl StringTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), strings: HashMap::new() }
    }

    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, serde_json::Error> {
        let mut table: StringTable = serde_json::from_str(json)?;
        table.name = name.into();
        Ok(table)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }
}

impl ResourceBundle for StringTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_string(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_flat_json_object() {
        let table = StringTable::from_json(
            "levels.en",
            r#"{"Tutorial1Name": "First Steps", "Tutorial1Description": "Find the sugar."}"#,
        )
        .unwrap();
        assert_eq!(table.name(), "levels.en");
        assert_eq!(table.get_string("Tutorial1Name"), Some("First Steps"));
        assert_eq!(table.get_string("Missing"), None);
    }
}
