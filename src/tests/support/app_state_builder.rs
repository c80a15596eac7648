use actix_web::web;
use std::sync::Arc;

use crate::attestation::application::use_cases::generate_attestation::IGenerateAttestationUseCase;
use crate::auth::application::use_cases::list_users::IListUsersUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::evaluation::application::use_cases::counter_validate_evaluation::ICounterValidateUseCase;
use crate::evaluation::application::use_cases::submit_evaluation::ISubmitEvaluationUseCase;
use crate::internship::application::use_cases::assign_subject::IAssignSubjectUseCase;
use crate::internship::application::use_cases::update_status::IUpdateStatusUseCase;
use crate::stats::application::use_cases::get_kpis::IGetKpisUseCase;
use crate::student::application::ports::incoming::use_cases::CreateStudentUseCase;
use crate::subject::application::ports::incoming::use_cases::GetSubjectsUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a loud stub; tests swap in
/// real mocks for just the handlers they exercise.
pub struct TestAppStateBuilder {
    state: AppState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            state: AppState {
                login_user_use_case: Arc::new(StubLoginUser),
                register_user_use_case: Arc::new(StubRegisterUser),
                list_users_use_case: Arc::new(StubListUsers),
                update_user_use_case: Arc::new(StubUpdateUser),
                delete_user_use_case: Arc::new(StubDeleteUser),
                create_student_use_case: Arc::new(StubCreateStudent),
                get_students_use_case: Arc::new(StubGetStudents),
                update_student_use_case: Arc::new(StubUpdateStudent),
                delete_student_use_case: Arc::new(StubDeleteStudent),
                create_subject_use_case: Arc::new(StubCreateSubject),
                get_subjects_use_case: Arc::new(StubGetSubjects),
                update_subject_use_case: Arc::new(StubUpdateSubject),
                delete_subject_use_case: Arc::new(StubDeleteSubject),
                create_internship_use_case: Arc::new(StubCreateInternship),
                list_internships_use_case: Arc::new(StubListInternships),
                update_internship_use_case: Arc::new(StubUpdateInternship),
                update_status_use_case: Arc::new(StubUpdateStatus),
                assign_subject_use_case: Arc::new(StubAssignSubject),
                supervisor_internships_use_case: Arc::new(StubSupervisorInternships),
                finished_internships_use_case: Arc::new(StubFinishedInternships),
                proposed_internships_use_case: Arc::new(StubProposedInternships),
                add_note_use_case: Arc::new(StubAddNote),
                get_notes_use_case: Arc::new(StubGetNotes),
                submit_evaluation_use_case: Arc::new(StubSubmitEvaluation),
                counter_validate_use_case: Arc::new(StubCounterValidate),
                list_pending_evaluations_use_case: Arc::new(StubListPendingEvaluations),
                generate_attestation_use_case: Arc::new(StubGenerateAttestation),
                get_attestation_data_use_case: Arc::new(StubGetAttestationData),
                list_validated_internships_use_case: Arc::new(StubListValidatedInternships),
                get_kpis_use_case: Arc::new(StubGetKpis),
                get_distribution_use_case: Arc::new(StubGetDistribution),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.state.login_user_use_case = Arc::new(uc);
        self
    }

    pub fn with_register_user(mut self, uc: impl IRegisterUserUseCase + 'static) -> Self {
        self.state.register_user_use_case = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl IListUsersUseCase + 'static) -> Self {
        self.state.list_users_use_case = Arc::new(uc);
        self
    }

    pub fn with_create_student(mut self, uc: impl CreateStudentUseCase + 'static) -> Self {
        self.state.create_student_use_case = Arc::new(uc);
        self
    }

    pub fn with_get_subjects(mut self, uc: impl GetSubjectsUseCase + 'static) -> Self {
        self.state.get_subjects_use_case = Arc::new(uc);
        self
    }

    pub fn with_assign_subject(mut self, uc: impl IAssignSubjectUseCase + 'static) -> Self {
        self.state.assign_subject_use_case = Arc::new(uc);
        self
    }

    pub fn with_update_status(mut self, uc: impl IUpdateStatusUseCase + 'static) -> Self {
        self.state.update_status_use_case = Arc::new(uc);
        self
    }

    pub fn with_submit_evaluation(mut self, uc: impl ISubmitEvaluationUseCase + 'static) -> Self {
        self.state.submit_evaluation_use_case = Arc::new(uc);
        self
    }

    pub fn with_counter_validate(mut self, uc: impl ICounterValidateUseCase + 'static) -> Self {
        self.state.counter_validate_use_case = Arc::new(uc);
        self
    }

    pub fn with_generate_attestation(
        mut self,
        uc: impl IGenerateAttestationUseCase + 'static,
    ) -> Self {
        self.state.generate_attestation_use_case = Arc::new(uc);
        self
    }

    pub fn with_get_kpis(mut self, uc: impl IGetKpisUseCase + 'static) -> Self {
        self.state.get_kpis_use_case = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.state)
    }
}
