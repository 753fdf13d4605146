mod document;
mod io;
mod merge;
mod naming;
mod options;
pub mod order;
mod pad;
pub mod pipeline;
mod rotate;
mod split;
mod types;
mod workspace;

pub use io::load_pdf;
pub use merge::{merge_files, merge_to_file};
pub use naming::{PageFile, parse_page_number, scan_page_files};
pub use options::*;
pub use order::{
    apply_order, back_side_positions, compute_merge_order, padded_count, sheet_count, sheets,
};
pub use pad::{BLANK_PAGE_NAME, DUPLICATE_PAGE_NAME, pad_page_list};
pub use pipeline::{plan, reorder};
pub use rotate::rotate_pages;
pub use split::split_document;
pub use types::*;
pub use workspace::WorkDir;
