//! Default stand-ins for every use case in `AppState`. Each one fails
//! loudly if a test exercises it without swapping in a real mock, so a
//! route test can never silently rely on behavior it did not stub.

use async_trait::async_trait;

use crate::attestation::application::domain::entities::AttestationData;
use crate::attestation::application::use_cases::generate_attestation::{
    GenerateAttestationError, GenerationResult, IGenerateAttestationUseCase,
};
use crate::attestation::application::use_cases::get_attestation_data::{
    GetAttestationError, IGetAttestationDataUseCase,
};
use crate::attestation::application::use_cases::list_validated_internships::{
    IListValidatedInternshipsUseCase, ListValidatedError,
};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::use_cases::delete_user::{DeleteUserError, IDeleteUserUseCase};
use crate::auth::application::use_cases::list_users::{
    IListUsersUseCase, ListUsersError, UserSummary,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserCommand, RegisterUserError, RegisteredUser,
};
use crate::auth::application::use_cases::update_user::{
    IUpdateUserUseCase, UpdateUserCommand, UpdateUserError,
};
use crate::evaluation::application::domain::entities::PendingEvaluationItem;
use crate::evaluation::application::use_cases::counter_validate_evaluation::{
    CounterValidateError, CounterValidationResult, ICounterValidateUseCase,
};
use crate::evaluation::application::use_cases::list_pending_evaluations::{
    IListPendingEvaluationsUseCase, ListPendingError,
};
use crate::evaluation::application::use_cases::submit_evaluation::{
    ISubmitEvaluationUseCase, SubmitEvaluationCommand, SubmitEvaluationError,
    SubmitEvaluationResult,
};
use crate::internship::application::domain::entities::{
    FinishedInternshipItem, Internship, InternshipListItem, InternshipNote,
};
use crate::internship::application::domain::status::InternshipStatus;
use crate::internship::application::use_cases::assign_subject::{
    AssignSubjectError, IAssignSubjectUseCase,
};
use crate::internship::application::use_cases::create_internship::{
    CreateInternshipCommand, CreateInternshipError, ICreateInternshipUseCase,
};
use crate::internship::application::use_cases::internship_notes::{
    IAddNoteUseCase, IGetNotesUseCase, NoteError,
};
use crate::internship::application::use_cases::list_internships::{
    IListInternshipsUseCase, ListInternshipsError,
};
use crate::internship::application::use_cases::supervisor_listings::{
    IFinishedInternshipsUseCase, IProposedInternshipsUseCase, ISupervisorInternshipsUseCase,
    SupervisorListingError,
};
use crate::internship::application::use_cases::update_internship::{
    IUpdateInternshipUseCase, UpdateInternshipCommand, UpdateInternshipError,
};
use crate::internship::application::use_cases::update_status::{
    IUpdateStatusUseCase, StatusUpdateResult, UpdateStatusError,
};
use crate::stats::application::domain::entities::{DistributionData, KpiData};
use crate::stats::application::use_cases::get_distribution::{
    GetDistributionError, IGetDistributionUseCase,
};
use crate::stats::application::use_cases::get_kpis::{GetKpisError, IGetKpisUseCase};
use crate::student::application::domain::entities::Student;
use crate::student::application::ports::incoming::use_cases::{
    CreateStudentCommand, CreateStudentError, CreateStudentUseCase, DeleteStudentError,
    DeleteStudentUseCase, GetStudentsError, GetStudentsUseCase, UpdateStudentCommand,
    UpdateStudentError, UpdateStudentUseCase,
};
use crate::subject::application::domain::entities::Subject;
use crate::subject::application::ports::incoming::use_cases::{
    CreateSubjectCommand, CreateSubjectError, CreateSubjectUseCase, DeleteSubjectError,
    DeleteSubjectUseCase, GetSubjectsError, GetSubjectsUseCase, UpdateSubjectCommand,
    UpdateSubjectError, UpdateSubjectUseCase,
};

const NOT_STUBBED: &str = "use case not stubbed in this test";

// ── auth ─────────────────────────────────────────────────

pub struct StubLoginUser;

#[async_trait]
impl ILoginUserUseCase for StubLoginUser {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::QueryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubRegisterUser;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUser {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<RegisteredUser, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubListUsers;

#[async_trait]
impl IListUsersUseCase for StubListUsers {
    async fn execute(&self, _role: Option<Role>) -> Result<Vec<UserSummary>, ListUsersError> {
        Err(ListUsersError::QueryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubUpdateUser;

#[async_trait]
impl IUpdateUserUseCase for StubUpdateUser {
    async fn execute(&self, _command: UpdateUserCommand) -> Result<UserSummary, UpdateUserError> {
        Err(UpdateUserError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubDeleteUser;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUser {
    async fn execute(&self, _user_id: i32) -> Result<(), DeleteUserError> {
        Err(DeleteUserError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

// ── student ──────────────────────────────────────────────

pub struct StubCreateStudent;

#[async_trait]
impl CreateStudentUseCase for StubCreateStudent {
    async fn execute(&self, _command: CreateStudentCommand) -> Result<Student, CreateStudentError> {
        Err(CreateStudentError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubGetStudents;

#[async_trait]
impl GetStudentsUseCase for StubGetStudents {
    async fn execute(&self) -> Result<Vec<Student>, GetStudentsError> {
        Err(GetStudentsError::QueryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubUpdateStudent;

#[async_trait]
impl UpdateStudentUseCase for StubUpdateStudent {
    async fn execute(&self, _command: UpdateStudentCommand) -> Result<Student, UpdateStudentError> {
        Err(UpdateStudentError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubDeleteStudent;

#[async_trait]
impl DeleteStudentUseCase for StubDeleteStudent {
    async fn execute(&self, _student_id: i32) -> Result<(), DeleteStudentError> {
        Err(DeleteStudentError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

// ── subject ──────────────────────────────────────────────

pub struct StubCreateSubject;

#[async_trait]
impl CreateSubjectUseCase for StubCreateSubject {
    async fn execute(&self, _command: CreateSubjectCommand) -> Result<Subject, CreateSubjectError> {
        Err(CreateSubjectError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubGetSubjects;

#[async_trait]
impl GetSubjectsUseCase for StubGetSubjects {
    async fn execute(&self) -> Result<Vec<Subject>, GetSubjectsError> {
        Err(GetSubjectsError::QueryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubUpdateSubject;

#[async_trait]
impl UpdateSubjectUseCase for StubUpdateSubject {
    async fn execute(&self, _command: UpdateSubjectCommand) -> Result<Subject, UpdateSubjectError> {
        Err(UpdateSubjectError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubDeleteSubject;

#[async_trait]
impl DeleteSubjectUseCase for StubDeleteSubject {
    async fn execute(&self, _subject_id: i32) -> Result<(), DeleteSubjectError> {
        Err(DeleteSubjectError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

// ── internship ───────────────────────────────────────────

pub struct StubCreateInternship;

#[async_trait]
impl ICreateInternshipUseCase for StubCreateInternship {
    async fn execute(
        &self,
        _command: CreateInternshipCommand,
    ) -> Result<Internship, CreateInternshipError> {
        Err(CreateInternshipError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubListInternships;

#[async_trait]
impl IListInternshipsUseCase for StubListInternships {
    async fn execute(
        &self,
        _status: Option<InternshipStatus>,
    ) -> Result<Vec<InternshipListItem>, ListInternshipsError> {
        Err(ListInternshipsError::QueryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubUpdateInternship;

#[async_trait]
impl IUpdateInternshipUseCase for StubUpdateInternship {
    async fn execute(
        &self,
        _command: UpdateInternshipCommand,
    ) -> Result<Internship, UpdateInternshipError> {
        Err(UpdateInternshipError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubUpdateStatus;

#[async_trait]
impl IUpdateStatusUseCase for StubUpdateStatus {
    async fn execute(
        &self,
        _internship_id: i32,
        _new_status: &str,
    ) -> Result<StatusUpdateResult, UpdateStatusError> {
        Err(UpdateStatusError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubAssignSubject;

#[async_trait]
impl IAssignSubjectUseCase for StubAssignSubject {
    async fn execute(
        &self,
        _internship_id: i32,
        _subject_id: i32,
        _supervisor_id: i32,
    ) -> Result<(), AssignSubjectError> {
        Err(AssignSubjectError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubSupervisorInternships;

#[async_trait]
impl ISupervisorInternshipsUseCase for StubSupervisorInternships {
    async fn execute(
        &self,
        _supervisor_id: i32,
    ) -> Result<Vec<InternshipListItem>, SupervisorListingError> {
        Err(SupervisorListingError::QueryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubFinishedInternships;

#[async_trait]
impl IFinishedInternshipsUseCase for StubFinishedInternships {
    async fn execute(
        &self,
        _supervisor_id: i32,
    ) -> Result<Vec<FinishedInternshipItem>, SupervisorListingError> {
        Err(SupervisorListingError::QueryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubProposedInternships;

#[async_trait]
impl IProposedInternshipsUseCase for StubProposedInternships {
    async fn execute(&self) -> Result<Vec<InternshipListItem>, SupervisorListingError> {
        Err(SupervisorListingError::QueryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubAddNote;

#[async_trait]
impl IAddNoteUseCase for StubAddNote {
    async fn execute(
        &self,
        _internship_id: i32,
        _supervisor_id: i32,
        _content: String,
    ) -> Result<InternshipNote, NoteError> {
        Err(NoteError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubGetNotes;

#[async_trait]
impl IGetNotesUseCase for StubGetNotes {
    async fn execute(
        &self,
        _internship_id: i32,
        _supervisor_id: i32,
    ) -> Result<Vec<InternshipNote>, NoteError> {
        Err(NoteError::RepositoryError(NOT_STUBBED.to_string()))
    }
}

// ── evaluation ───────────────────────────────────────────

pub struct StubSubmitEvaluation;

#[async_trait]
impl ISubmitEvaluationUseCase for StubSubmitEvaluation {
    async fn execute(
        &self,
        _command: SubmitEvaluationCommand,
    ) -> Result<SubmitEvaluationResult, SubmitEvaluationError> {
        Err(SubmitEvaluationError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubCounterValidate;

#[async_trait]
impl ICounterValidateUseCase for StubCounterValidate {
    async fn execute(
        &self,
        _evaluation_id: i32,
        _chef_id: i32,
        _action_type: &str,
    ) -> Result<CounterValidationResult, CounterValidateError> {
        Err(CounterValidateError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubListPendingEvaluations;

#[async_trait]
impl IListPendingEvaluationsUseCase for StubListPendingEvaluations {
    async fn execute(&self) -> Result<Vec<PendingEvaluationItem>, ListPendingError> {
        Err(ListPendingError::QueryError(NOT_STUBBED.to_string()))
    }
}

// ── attestation ──────────────────────────────────────────

pub struct StubGenerateAttestation;

#[async_trait]
impl IGenerateAttestationUseCase for StubGenerateAttestation {
    async fn execute(
        &self,
        _internship_id: i32,
    ) -> Result<GenerationResult, GenerateAttestationError> {
        Err(GenerateAttestationError::RepositoryError(
            NOT_STUBBED.to_string(),
        ))
    }
}

pub struct StubGetAttestationData;

#[async_trait]
impl IGetAttestationDataUseCase for StubGetAttestationData {
    async fn execute(&self, _internship_id: i32) -> Result<AttestationData, GetAttestationError> {
        Err(GetAttestationError::QueryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubListValidatedInternships;

#[async_trait]
impl IListValidatedInternshipsUseCase for StubListValidatedInternships {
    async fn execute(&self) -> Result<Vec<InternshipListItem>, ListValidatedError> {
        Err(ListValidatedError::QueryError(NOT_STUBBED.to_string()))
    }
}

// ── stats ────────────────────────────────────────────────

pub struct StubGetKpis;

#[async_trait]
impl IGetKpisUseCase for StubGetKpis {
    async fn execute(&self) -> Result<KpiData, GetKpisError> {
        Err(GetKpisError::QueryError(NOT_STUBBED.to_string()))
    }
}

pub struct StubGetDistribution;

#[async_trait]
impl IGetDistributionUseCase for StubGetDistribution {
    async fn execute(&self) -> Result<DistributionData, GetDistributionError> {
        Err(GetDistributionError::QueryError(NOT_STUBBED.to_string()))
    }
}
