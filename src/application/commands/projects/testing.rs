// src/application/commands/projects/testing.rs
//! In-memory collaborators for exercising the project write flow without a
//! database, filesystem, or outbound webhook.
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{TimeZone, Utc};

use crate::application::dto::LeadDto;
use crate::application::ports::notifier::{LeadNotifier, NotifierError};
use crate::application::ports::storage::{ImagePayload, ImageStore, StorageError};
use crate::application::ports::time::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::lead::{Lead, LeadId, LeadRepository, NewLead};
use crate::domain::project::services::ProjectSlugService;
use crate::domain::project::{
    NewProject, Project, ProjectId, ProjectReadRepository, ProjectSlug, ProjectUpdate,
    ProjectWriteRepository, TechnologySyncPlan,
};
use crate::domain::project_type::{ProjectType, ProjectTypeId, ProjectTypeRepository};
use crate::domain::technology::{Technology, TechnologyId, TechnologyRepository};
use crate::infrastructure::util::DefaultSlugGenerator;

use super::ProjectCommandService;

pub(crate) fn payload(file_name: &str) -> ImagePayload {
    ImagePayload {
        file_name: file_name.to_owned(),
        bytes: Bytes::from_static(b"\x89PNG-not-really"),
    }
}

#[derive(Default)]
struct ProjectState {
    rows: Vec<Project>,
    associations: HashMap<i64, BTreeSet<TechnologyId>>,
    next_id: i64,
}

#[derive(Default)]
pub(crate) struct InMemoryProjects {
    state: Mutex<ProjectState>,
    // Simulates a writer that grabbed the slug between the probe and the
    // insert, the way the UNIQUE index would report it.
    steal_next_slug: AtomicBool,
}

#[async_trait]
impl ProjectReadRepository for InMemoryProjects {
    async fn find_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &ProjectSlug) -> DomainResult<Option<Project>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|p| &p.slug == slug)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Project>> {
        Ok(self.state.lock().unwrap().rows.clone())
    }

    async fn technology_ids(&self, id: ProjectId) -> DomainResult<BTreeSet<TechnologyId>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .associations
            .get(&i64::from(id))
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl ProjectWriteRepository for InMemoryProjects {
    async fn insert(&self, project: NewProject) -> DomainResult<Project> {
        if self.steal_next_slug.swap(false, Ordering::SeqCst) {
            return Err(DomainError::Conflict(
                "UNIQUE constraint failed: projects.slug".into(),
            ));
        }
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let row = Project {
            id: ProjectId::new(state.next_id)?,
            title: project.title,
            slug: project.slug,
            description: project.description,
            cover_image: project.cover_image,
            type_id: project.type_id,
            created_at: project.created_at,
            updated_at: project.updated_at,
        };
        state.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, update: ProjectUpdate) -> DomainResult<Project> {
        let mut state = self.state.lock().unwrap();
        let row = state
            .rows
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("project not found".into()))?;
        row.title = update.title;
        row.slug = update.slug;
        row.description = update.description;
        if let Some(path) = update.cover_image {
            row.cover_image = Some(path);
        }
        row.type_id = update.type_id;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: ProjectId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.rows.retain(|p| p.id != id);
        // Mirrors the ON DELETE CASCADE on the pivot table.
        state.associations.remove(&i64::from(id));
        Ok(())
    }

    async fn sync_technologies(
        &self,
        id: ProjectId,
        plan: &TechnologySyncPlan,
    ) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let set = state.associations.entry(i64::from(id)).or_default();
        for tech in &plan.to_remove {
            set.remove(tech);
        }
        for tech in &plan.to_add {
            set.insert(*tech);
        }
        Ok(())
    }
}

pub(crate) struct InMemoryTechnologies {
    rows: Vec<Technology>,
}

impl InMemoryTechnologies {
    fn with_ids(ids: &[i64]) -> Self {
        Self {
            rows: ids
                .iter()
                .map(|id| Technology {
                    id: TechnologyId::new(*id).unwrap(),
                    name: format!("tech-{id}"),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl TechnologyRepository for InMemoryTechnologies {
    async fn list(&self) -> DomainResult<Vec<Technology>> {
        Ok(self.rows.clone())
    }

    async fn filter_existing(
        &self,
        ids: &BTreeSet<TechnologyId>,
    ) -> DomainResult<BTreeSet<TechnologyId>> {
        Ok(self
            .rows
            .iter()
            .map(|t| t.id)
            .filter(|id| ids.contains(id))
            .collect())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryProjectTypes {
    rows: Vec<ProjectType>,
}

#[async_trait]
impl ProjectTypeRepository for InMemoryProjectTypes {
    async fn list(&self) -> DomainResult<Vec<ProjectType>> {
        Ok(self.rows.clone())
    }

    async fn exists(&self, id: ProjectTypeId) -> DomainResult<bool> {
        Ok(self.rows.iter().any(|t| t.id == id))
    }
}

#[derive(Default)]
pub(crate) struct InMemoryLeads {
    rows: Mutex<Vec<Lead>>,
    next_id: AtomicI64,
}

#[async_trait]
impl LeadRepository for InMemoryLeads {
    async fn insert(&self, lead: NewLead) -> DomainResult<Lead> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = Lead {
            id: LeadId::new(id)?,
            title: lead.title,
            slug: lead.slug,
            description: lead.description,
            created_at: lead.created_at,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

#[derive(Default)]
pub(crate) struct RecordingImageStore {
    fail_put: bool,
    fail_delete: bool,
    counter: AtomicI64,
    deleted: Mutex<Vec<String>>,
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn put(
        &self,
        namespace: &str,
        payload: &ImagePayload,
    ) -> Result<String, StorageError> {
        if self.fail_put {
            return Err(StorageError::Write("disk full".into()));
        }
        let seq = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{namespace}/{seq}-{}", payload.file_name))
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        if self.fail_delete {
            return Err(StorageError::Delete("permission denied".into()));
        }
        self.deleted.lock().unwrap().push(path.to_owned());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    fail: bool,
    notified: Mutex<Vec<LeadDto>>,
}

#[async_trait]
impl LeadNotifier for RecordingNotifier {
    async fn notify_new_lead(&self, lead: &LeadDto) -> Result<(), NotifierError> {
        if self.fail {
            return Err(NotifierError("webhook unreachable".into()));
        }
        self.notified.lock().unwrap().push(lead.clone());
        Ok(())
    }
}

pub(crate) struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }
}

pub(crate) struct TestHarness {
    service: ProjectCommandService,
    projects: Arc<InMemoryProjects>,
    leads: Arc<InMemoryLeads>,
    store: Arc<RecordingImageStore>,
    notifier: Arc<RecordingNotifier>,
}

impl TestHarness {
    pub(crate) fn new() -> Self {
        Self::build(&[], RecordingImageStore::default(), false)
    }

    pub(crate) fn with_technologies(ids: &[i64]) -> Self {
        Self::build(ids, RecordingImageStore::default(), false)
    }

    pub(crate) fn with_failing_storage() -> Self {
        Self::build(
            &[],
            RecordingImageStore {
                fail_put: true,
                ..RecordingImageStore::default()
            },
            false,
        )
    }

    pub(crate) fn with_failing_storage_delete() -> Self {
        Self::build(
            &[],
            RecordingImageStore {
                fail_delete: true,
                ..RecordingImageStore::default()
            },
            false,
        )
    }

    pub(crate) fn with_failing_notifier() -> Self {
        Self::build(&[], RecordingImageStore::default(), true)
    }

    pub(crate) fn with_racing_slug_writer() -> Self {
        let harness = Self::new();
        harness
            .projects
            .steal_next_slug
            .store(true, Ordering::SeqCst);
        harness
    }

    fn build(technology_ids: &[i64], store: RecordingImageStore, notifier_fails: bool) -> Self {
        let projects = Arc::new(InMemoryProjects::default());
        let technologies = Arc::new(InMemoryTechnologies::with_ids(technology_ids));
        let project_types = Arc::new(InMemoryProjectTypes::default());
        let leads = Arc::new(InMemoryLeads::default());
        let store = Arc::new(store);
        let notifier = Arc::new(RecordingNotifier {
            fail: notifier_fails,
            notified: Mutex::new(Vec::new()),
        });

        let slug_service = Arc::new(ProjectSlugService::new(
            Arc::clone(&projects) as Arc<dyn ProjectReadRepository>,
            Arc::new(DefaultSlugGenerator),
        ));

        let service = ProjectCommandService::new(
            Arc::clone(&projects) as Arc<dyn ProjectWriteRepository>,
            Arc::clone(&projects) as Arc<dyn ProjectReadRepository>,
            Arc::clone(&technologies) as Arc<dyn TechnologyRepository>,
            Arc::clone(&project_types) as Arc<dyn ProjectTypeRepository>,
            Arc::clone(&leads) as Arc<dyn LeadRepository>,
            slug_service,
            Arc::clone(&store) as Arc<dyn ImageStore>,
            Arc::clone(&notifier) as Arc<dyn LeadNotifier>,
            Arc::new(FixedClock),
        );

        Self {
            service,
            projects,
            leads,
            store,
            notifier,
        }
    }

    pub(crate) fn service(&self) -> &ProjectCommandService {
        &self.service
    }

    pub(crate) fn project_count(&self) -> usize {
        self.projects.state.lock().unwrap().rows.len()
    }

    pub(crate) fn stored_technology_ids(&self, project_id: i64) -> Vec<i64> {
        self.projects
            .state
            .lock()
            .unwrap()
            .associations
            .get(&project_id)
            .map(|set| set.iter().map(|id| i64::from(*id)).collect())
            .unwrap_or_default()
    }

    pub(crate) fn lead_count(&self) -> usize {
        self.leads.rows.lock().unwrap().len()
    }

    pub(crate) fn leads(&self) -> Vec<Lead> {
        self.leads.rows.lock().unwrap().clone()
    }

    pub(crate) fn deleted_paths(&self) -> Vec<String> {
        self.store.deleted.lock().unwrap().clone()
    }

    pub(crate) fn notified_lead_slugs(&self) -> Vec<String> {
        self.notifier
            .notified
            .lock()
            .unwrap()
            .iter()
            .map(|lead| lead.slug.clone())
            .collect()
    }
}
