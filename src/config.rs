use crate::error::{Error, Result};
use crate::item::WeightedItem;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Weight given to every line of a converted text file
pub const DEFAULT_WEIGHT: u32 = 100;

/// Where converted text files are written when no output path is given
pub const DEFAULT_OUTPUT_FILE: &str = "generated_output_items_from_textfile.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCollection {
    #[serde(default)]
    pub items: Vec<WeightedItem>,
}

impl ItemCollection {
    pub fn from_yaml_str(yaml: &str) -> std::result::Result<ItemCollection, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl From<Vec<WeightedItem>> for ItemCollection {
    fn from(items: Vec<WeightedItem>) -> Self {
        ItemCollection { items }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_yaml<P: AsRef<Path>>(path: P) -> Result<ItemCollection> {
    let path = path.as_ref();
    let contents = read_file(path)?;
    let collection = ItemCollection::from_yaml_str(&contents).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Loaded {} items from {}",
        collection.items.len(),
        path.display()
    );
    Ok(collection)
}

pub fn read_text<P: AsRef<Path>>(path: P) -> Result<ItemCollection> {
    let path = path.as_ref();
    let collection = parse_text(&read_file(path)?);
    if collection.items.is_empty() {
        warn!("No items found in {}", path.display());
    }
    Ok(collection)
}

///
/// One item per line, each weighted `DEFAULT_WEIGHT`.
///
/// Empty lines and lines holding only a carriage return are skipped; any other
/// carriage returns are stripped from the label.
///
pub fn parse_text(text: &str) -> ItemCollection {
    text.split('\n')
        .filter(|line| !line.is_empty() && *line != "\r")
        .map(|line| WeightedItem::new(line.replace('\r', ""), DEFAULT_WEIGHT))
        .collect::<Vec<_>>()
        .into()
}

pub fn write_yaml<P: AsRef<Path>>(path: P, collection: &ItemCollection) -> Result<()> {
    let path = path.as_ref();
    let yaml = collection.to_yaml_string()?;
    fs::write(path, yaml).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Wrote {} items to {}",
        collection.items.len(),
        path.display()
    );
    Ok(())
}
