mod report;

pub use report::ReportManager;
