pub mod modules;
pub use modules::attestation;
pub use modules::auth;
pub use modules::evaluation;
pub use modules::internship;
pub use modules::notification;
pub use modules::stats;
pub use modules::student;
pub use modules::subject;
pub mod api;
pub mod health;
pub mod shared;

use crate::attestation::adapter::outgoing::attestation_query_postgres::AttestationQueryPostgres;
use crate::attestation::adapter::outgoing::attestation_repository_postgres::AttestationRepositoryPostgres;
use crate::attestation::application::use_cases::generate_attestation::{
    GenerateAttestationUseCase, IGenerateAttestationUseCase,
};
use crate::attestation::application::use_cases::get_attestation_data::{
    GetAttestationDataUseCase, IGetAttestationDataUseCase,
};
use crate::attestation::application::use_cases::list_validated_internships::{
    IListValidatedInternshipsUseCase, ListValidatedInternshipsUseCase,
};
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::hash::PasswordHashingService;
use crate::auth::application::services::jwt::{JwtConfig, JwtService};
use crate::auth::application::use_cases::{
    delete_user::{DeleteUserUseCase, IDeleteUserUseCase},
    list_users::{IListUsersUseCase, ListUsersUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    update_user::{IUpdateUserUseCase, UpdateUserUseCase},
};
use crate::evaluation::adapter::outgoing::evaluation_query_postgres::EvaluationQueryPostgres;
use crate::evaluation::adapter::outgoing::evaluation_repository_postgres::EvaluationRepositoryPostgres;
use crate::evaluation::application::use_cases::{
    counter_validate_evaluation::{CounterValidateUseCase, ICounterValidateUseCase},
    list_pending_evaluations::{IListPendingEvaluationsUseCase, ListPendingEvaluationsUseCase},
    submit_evaluation::{ISubmitEvaluationUseCase, SubmitEvaluationUseCase},
};
use crate::internship::adapter::outgoing::internship_query_postgres::InternshipQueryPostgres;
use crate::internship::adapter::outgoing::internship_repository_postgres::InternshipRepositoryPostgres;
use crate::internship::adapter::outgoing::note_repository_postgres::NoteRepositoryPostgres;
use crate::internship::application::use_cases::{
    assign_subject::{AssignSubjectUseCase, IAssignSubjectUseCase},
    create_internship::{CreateInternshipUseCase, ICreateInternshipUseCase},
    internship_notes::{IAddNoteUseCase, IGetNotesUseCase, InternshipNotesUseCase},
    list_internships::{IListInternshipsUseCase, ListInternshipsUseCase},
    supervisor_listings::{
        IFinishedInternshipsUseCase, IProposedInternshipsUseCase, ISupervisorInternshipsUseCase,
        SupervisorListings,
    },
    update_internship::{IUpdateInternshipUseCase, UpdateInternshipUseCase},
    update_status::{IUpdateStatusUseCase, UpdateStatusUseCase},
};
use crate::notification::adapter::outgoing::letter_file_generator::LetterFileGenerator;
use crate::notification::adapter::outgoing::mock_sender::MockEmailSender;
use crate::notification::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::notification::application::ports::outgoing::{
    AcceptanceNotifier, DocumentGenerator, EmailSender,
};
use crate::notification::application::services::AcceptanceNoticeService;
use crate::stats::adapter::outgoing::stats_query_postgres::StatsQueryPostgres;
use crate::stats::application::use_cases::{
    get_distribution::{GetDistributionUseCase, IGetDistributionUseCase},
    get_kpis::{GetKpisUseCase, IGetKpisUseCase},
};
use crate::student::adapter::outgoing::student_query_postgres::StudentQueryPostgres;
use crate::student::adapter::outgoing::student_repository_postgres::StudentRepositoryPostgres;
use crate::student::application::ports::incoming::use_cases::{
    CreateStudentUseCase, DeleteStudentUseCase, GetStudentsUseCase, UpdateStudentUseCase,
};
use crate::student::application::services::{
    CreateStudentService, DeleteStudentService, GetStudentsService, UpdateStudentService,
};
use crate::subject::adapter::outgoing::subject_query_postgres::SubjectQueryPostgres;
use crate::subject::adapter::outgoing::subject_repository_postgres::SubjectRepositoryPostgres;
use crate::subject::application::ports::incoming::use_cases::{
    CreateSubjectUseCase, DeleteSubjectUseCase, GetSubjectsUseCase, UpdateSubjectUseCase,
};
use crate::subject::application::services::{
    CreateSubjectService, DeleteSubjectService, GetSubjectsService, UpdateSubjectService,
};

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub list_users_use_case: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub update_user_use_case: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,

    pub create_student_use_case: Arc<dyn CreateStudentUseCase + Send + Sync>,
    pub get_students_use_case: Arc<dyn GetStudentsUseCase + Send + Sync>,
    pub update_student_use_case: Arc<dyn UpdateStudentUseCase + Send + Sync>,
    pub delete_student_use_case: Arc<dyn DeleteStudentUseCase + Send + Sync>,

    pub create_subject_use_case: Arc<dyn CreateSubjectUseCase + Send + Sync>,
    pub get_subjects_use_case: Arc<dyn GetSubjectsUseCase + Send + Sync>,
    pub update_subject_use_case: Arc<dyn UpdateSubjectUseCase + Send + Sync>,
    pub delete_subject_use_case: Arc<dyn DeleteSubjectUseCase + Send + Sync>,

    pub create_internship_use_case: Arc<dyn ICreateInternshipUseCase + Send + Sync>,
    pub list_internships_use_case: Arc<dyn IListInternshipsUseCase + Send + Sync>,
    pub update_internship_use_case: Arc<dyn IUpdateInternshipUseCase + Send + Sync>,
    pub update_status_use_case: Arc<dyn IUpdateStatusUseCase + Send + Sync>,
    pub assign_subject_use_case: Arc<dyn IAssignSubjectUseCase + Send + Sync>,
    pub supervisor_internships_use_case: Arc<dyn ISupervisorInternshipsUseCase + Send + Sync>,
    pub finished_internships_use_case: Arc<dyn IFinishedInternshipsUseCase + Send + Sync>,
    pub proposed_internships_use_case: Arc<dyn IProposedInternshipsUseCase + Send + Sync>,
    pub add_note_use_case: Arc<dyn IAddNoteUseCase + Send + Sync>,
    pub get_notes_use_case: Arc<dyn IGetNotesUseCase + Send + Sync>,

    pub submit_evaluation_use_case: Arc<dyn ISubmitEvaluationUseCase + Send + Sync>,
    pub counter_validate_use_case: Arc<dyn ICounterValidateUseCase + Send + Sync>,
    pub list_pending_evaluations_use_case: Arc<dyn IListPendingEvaluationsUseCase + Send + Sync>,

    pub generate_attestation_use_case: Arc<dyn IGenerateAttestationUseCase + Send + Sync>,
    pub get_attestation_data_use_case: Arc<dyn IGetAttestationDataUseCase + Send + Sync>,
    pub list_validated_internships_use_case:
        Arc<dyn IListValidatedInternshipsUseCase + Send + Sync>,

    pub get_kpis_use_case: Arc<dyn IGetKpisUseCase + Send + Sync>,
    pub get_distribution_use_case: Arc<dyn IGetDistributionUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading: .env.{environment} first, then .env
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&conn, None)
        .await
        .expect("Failed to run migrations");

    let db_arc = Arc::new(conn);

    // SMTP setup: real relay in production, local Mailpit in development,
    // a collector when nothing is configured.
    let from_email =
        env::var("EMAIL_FROM").unwrap_or_else(|_| "internships@localhost".to_string());
    let email_sender: Arc<dyn EmailSender + Send + Sync> = if env_name == "production" {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");
        Arc::new(
            SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
                .expect("Invalid SMTP relay configuration"),
        )
    } else if let Ok(smtp_host) = env::var("SMTP_HOST") {
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");
        Arc::new(SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email))
    } else {
        tracing::warn!("No SMTP configuration; outgoing mail is collected in memory");
        Arc::new(MockEmailSender::default())
    };

    let files_dir = env::var("FILES_DIR").unwrap_or_else(|_| "./files".to_string());
    let files_base_url = env::var("FILES_BASE_URL")
        .unwrap_or_else(|_| format!("http://{server_url}/files"));
    let document_generator: Arc<dyn DocumentGenerator + Send + Sync> =
        Arc::new(LetterFileGenerator::new(files_dir, files_base_url));

    let acceptance_notifier: Arc<dyn AcceptanceNotifier + Send + Sync> =
        Arc::new(AcceptanceNoticeService::new(
            email_sender,
            document_generator,
            env::var("NOTICE_SENDER_NAME")
                .unwrap_or_else(|_| "The Internship Management Team".to_string()),
        ));

    // Auth components
    let jwt_service = JwtService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let password_hasher = PasswordHashingService::argon2();

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        password_hasher.clone(),
        Arc::clone(&token_provider_arc),
    );
    let register_user_use_case =
        RegisterUserUseCase::new(user_repo.clone(), password_hasher.clone());
    let list_users_use_case = ListUsersUseCase::new(user_query.clone());
    let update_user_use_case = UpdateUserUseCase::new(user_repo.clone(), password_hasher.clone());
    let delete_user_use_case = DeleteUserUseCase::new(user_repo);

    // Student directory
    let student_repo = StudentRepositoryPostgres::new(Arc::clone(&db_arc));
    let student_query = StudentQueryPostgres::new(Arc::clone(&db_arc));
    let create_student_use_case = CreateStudentService::new(student_repo.clone());
    let get_students_use_case = GetStudentsService::new(student_query);
    let update_student_use_case = UpdateStudentService::new(student_repo.clone());
    let delete_student_use_case = DeleteStudentService::new(student_repo);

    // Subject catalogue
    let subject_repo = SubjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let subject_query = SubjectQueryPostgres::new(Arc::clone(&db_arc));
    let create_subject_use_case = CreateSubjectService::new(subject_repo.clone());
    let get_subjects_use_case = GetSubjectsService::new(subject_query);
    let update_subject_use_case = UpdateSubjectService::new(subject_repo.clone());
    let delete_subject_use_case = DeleteSubjectService::new(subject_repo);

    // Internship lifecycle
    let internship_repo = InternshipRepositoryPostgres::new(Arc::clone(&db_arc));
    let internship_query = InternshipQueryPostgres::new(Arc::clone(&db_arc));
    let note_repo = NoteRepositoryPostgres::new(Arc::clone(&db_arc));

    let create_internship_use_case = CreateInternshipUseCase::new(internship_repo.clone());
    let list_internships_use_case = ListInternshipsUseCase::new(internship_query.clone());
    let update_internship_use_case =
        UpdateInternshipUseCase::new(internship_repo.clone(), internship_query.clone());
    let update_status_use_case = UpdateStatusUseCase::new(
        internship_repo.clone(),
        internship_query.clone(),
        Arc::clone(&acceptance_notifier),
    );
    let assign_subject_use_case = AssignSubjectUseCase::new(internship_repo);
    let listings = Arc::new(SupervisorListings::new(internship_query.clone()));
    let notes_use_case = Arc::new(InternshipNotesUseCase::new(
        note_repo,
        internship_query.clone(),
    ));

    // Evaluation workflow
    let evaluation_repo = EvaluationRepositoryPostgres::new(Arc::clone(&db_arc));
    let evaluation_query = EvaluationQueryPostgres::new(Arc::clone(&db_arc));
    let submit_evaluation_use_case =
        SubmitEvaluationUseCase::new(evaluation_repo.clone(), internship_query.clone());
    let counter_validate_use_case = CounterValidateUseCase::new(evaluation_repo);
    let list_pending_evaluations_use_case = ListPendingEvaluationsUseCase::new(evaluation_query);

    // Attestations
    let attestation_repo = AttestationRepositoryPostgres::new(Arc::clone(&db_arc));
    let attestation_query = AttestationQueryPostgres::new(Arc::clone(&db_arc));
    let qr_base_url = env::var("ATTESTATION_QR_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:51891/#/attestation_viewer".to_string());
    let generate_attestation_use_case =
        GenerateAttestationUseCase::new(attestation_repo, attestation_query.clone(), qr_base_url);
    let get_attestation_data_use_case = GetAttestationDataUseCase::new(attestation_query);
    let list_validated_internships_use_case =
        ListValidatedInternshipsUseCase::new(internship_query.clone());

    // Statistics
    let stats_query = StatsQueryPostgres::new(Arc::clone(&db_arc));
    let get_kpis_use_case = GetKpisUseCase::new(stats_query.clone());
    let get_distribution_use_case = GetDistributionUseCase::new(stats_query);

    let state = AppState {
        login_user_use_case: Arc::new(login_user_use_case),
        register_user_use_case: Arc::new(register_user_use_case),
        list_users_use_case: Arc::new(list_users_use_case),
        update_user_use_case: Arc::new(update_user_use_case),
        delete_user_use_case: Arc::new(delete_user_use_case),
        create_student_use_case: Arc::new(create_student_use_case),
        get_students_use_case: Arc::new(get_students_use_case),
        update_student_use_case: Arc::new(update_student_use_case),
        delete_student_use_case: Arc::new(delete_student_use_case),
        create_subject_use_case: Arc::new(create_subject_use_case),
        get_subjects_use_case: Arc::new(get_subjects_use_case),
        update_subject_use_case: Arc::new(update_subject_use_case),
        delete_subject_use_case: Arc::new(delete_subject_use_case),
        create_internship_use_case: Arc::new(create_internship_use_case),
        list_internships_use_case: Arc::new(list_internships_use_case),
        update_internship_use_case: Arc::new(update_internship_use_case),
        update_status_use_case: Arc::new(update_status_use_case),
        assign_subject_use_case: Arc::new(assign_subject_use_case),
        supervisor_internships_use_case: listings.clone(),
        finished_internships_use_case: listings.clone(),
        proposed_internships_use_case: listings,
        add_note_use_case: notes_use_case.clone(),
        get_notes_use_case: notes_use_case,
        submit_evaluation_use_case: Arc::new(submit_evaluation_use_case),
        counter_validate_use_case: Arc::new(counter_validate_use_case),
        list_pending_evaluations_use_case: Arc::new(list_pending_evaluations_use_case),
        generate_attestation_use_case: Arc::new(generate_attestation_use_case),
        get_attestation_data_use_case: Arc::new(get_attestation_data_use_case),
        list_validated_internships_use_case: Arc::new(list_validated_internships_use_case),
        get_kpis_use_case: Arc::new(get_kpis_use_case),
        get_distribution_use_case: Arc::new(get_distribution_use_case),
    };

    info!("Server running on {}", server_url);

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
            .default_service(web::route().to(not_found))
    })
    .bind(server_url)?
    .run()
    .await
}

async fn not_found() -> actix_web::HttpResponse {
    crate::shared::api::ApiResponse::not_found("Resource not found")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth + user admin
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_user_handler);
    // Students
    cfg.service(crate::student::adapter::incoming::web::routes::create_student_handler);
    cfg.service(crate::student::adapter::incoming::web::routes::get_students_handler);
    cfg.service(crate::student::adapter::incoming::web::routes::update_student_handler);
    cfg.service(crate::student::adapter::incoming::web::routes::delete_student_handler);
    // Subjects
    cfg.service(crate::subject::adapter::incoming::web::routes::create_subject_handler);
    cfg.service(crate::subject::adapter::incoming::web::routes::get_subjects_handler);
    cfg.service(crate::subject::adapter::incoming::web::routes::update_subject_handler);
    cfg.service(crate::subject::adapter::incoming::web::routes::delete_subject_handler);
    // Internships: literal segments before parameterized ones
    cfg.service(crate::internship::adapter::incoming::web::routes::list_my_internships_handler);
    cfg.service(
        crate::internship::adapter::incoming::web::routes::list_finished_internships_handler,
    );
    cfg.service(
        crate::internship::adapter::incoming::web::routes::list_proposed_internships_handler,
    );
    cfg.service(
        crate::attestation::adapter::incoming::web::routes::list_validated_internships_handler,
    );
    cfg.service(crate::internship::adapter::incoming::web::routes::create_internship_handler);
    cfg.service(crate::internship::adapter::incoming::web::routes::list_internships_handler);
    cfg.service(crate::internship::adapter::incoming::web::routes::update_internship_handler);
    cfg.service(
        crate::internship::adapter::incoming::web::routes::update_internship_status_handler,
    );
    cfg.service(crate::internship::adapter::incoming::web::routes::assign_subject_handler);
    cfg.service(crate::internship::adapter::incoming::web::routes::add_internship_note_handler);
    cfg.service(crate::internship::adapter::incoming::web::routes::get_internship_notes_handler);
    // Evaluations
    cfg.service(crate::evaluation::adapter::incoming::web::routes::evaluate_internship_handler);
    cfg.service(
        crate::evaluation::adapter::incoming::web::routes::list_pending_evaluations_handler,
    );
    cfg.service(crate::evaluation::adapter::incoming::web::routes::validate_evaluation_handler);
    // Attestations
    cfg.service(crate::attestation::adapter::incoming::web::routes::generate_attestation_handler);
    cfg.service(crate::attestation::adapter::incoming::web::routes::get_attestation_data_handler);
    // Statistics
    cfg.service(crate::stats::adapter::incoming::web::routes::get_kpis_handler);
    cfg.service(
        crate::stats::adapter::incoming::web::routes::get_internship_distribution_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
