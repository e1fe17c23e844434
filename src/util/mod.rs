mod ticker;

pub(crate) use ticker::Ticker;
