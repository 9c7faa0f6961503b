use fxhash::FxHashMap;

/*
    RawEvent is the unit the event source hands to a converter: a type tag
    naming the producing subsystem, an ordered list of opaque data blocks,
    and the string tags that begin-of-run events carry.
 */
#[derive(Debug, Clone, Default)]
pub struct RawEvent {
    pub event_type: String,
    blocks: Vec<Vec<u8>>,
    tags: FxHashMap<String, String>,
}

impl RawEvent {
    pub fn new(event_type: &str) -> Self {
        RawEvent {
            event_type: event_type.to_string(),
            blocks: Vec::new(),
            tags: FxHashMap::default(),
        }
    }

    pub fn add_block(&mut self, block: Vec<u8>) {
        self.blocks.push(block);
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    pub fn block(&self, index: usize) -> Option<&[u8]> {
        self.blocks.get(index).map(|block| block.as_slice())
    }

    pub fn blocks(&self) -> &[Vec<u8>] {
        &self.blocks
    }

    pub fn set_tag(&mut self, key: &str, value: &str) {
        self.tags.insert(key.to_string(), value.to_string());
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|value| value.as_str())
    }
}
