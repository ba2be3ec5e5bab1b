pub mod libpubquiz;
