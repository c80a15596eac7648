mod acceptance_notice_service;

pub use acceptance_notice_service::AcceptanceNoticeService;
