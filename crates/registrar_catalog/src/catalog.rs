//! The catalog: keyed storage for all record types.

use im::OrdMap;
use registrar_foundation::{CourseId, Error, FacultyId, LabId, Result, RoomId, StudentId};

use crate::course::Course;
use crate::facility::{Lab, Room};
use crate::faculty::Faculty;
use crate::student::Student;

/// In-memory storage for courses, students, faculty, rooms, and labs.
///
/// The catalog is a plain value with no global accessor: components that
/// need it take `&Catalog` at the call site. Records are keyed by
/// identifier in ordered maps, so every `all_*` iterator yields ascending
/// identifier order.
///
/// Lookup misses return `None`; only mutation misuse returns an error.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    courses: OrdMap<CourseId, Course>,
    students: OrdMap<StudentId, Student>,
    faculty: OrdMap<FacultyId, Faculty>,
    rooms: OrdMap<RoomId, Room>,
    labs: OrdMap<LabId, Lab>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Courses
    // =========================================================================

    /// Adds a course.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateId`] if a course with this id exists.
    pub fn add_course(&mut self, course: Course) -> Result<()> {
        if self.courses.contains_key(course.id()) {
            return Err(Error::DuplicateId(course.id().to_string()));
        }
        self.courses.insert(course.id().clone(), course);
        Ok(())
    }

    /// Looks up a course by id.
    #[must_use]
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.get(id)
    }

    /// Iterates all courses in ascending id order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Iterates all course ids in ascending order.
    pub fn course_ids(&self) -> impl Iterator<Item = &CourseId> {
        self.courses.keys()
    }

    // =========================================================================
    // Students
    // =========================================================================

    /// Adds a student.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateId`] if a student with this id exists.
    pub fn add_student(&mut self, student: Student) -> Result<()> {
        if self.students.contains_key(student.id()) {
            return Err(Error::DuplicateId(student.id().to_string()));
        }
        self.students.insert(student.id().clone(), student);
        Ok(())
    }

    /// Looks up a student by id.
    #[must_use]
    pub fn student(&self, id: &StudentId) -> Option<&Student> {
        self.students.get(id)
    }

    /// Iterates all students in ascending id order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Enrolls a student in a course, adding the course's credits to the
    /// student's total.
    ///
    /// # Errors
    /// Fails if either id is unknown, the student is already enrolled in or
    /// has already completed the course, or the credit total would overflow.
    pub fn enroll(&mut self, student_id: &StudentId, course_id: &CourseId) -> Result<()> {
        let credits = self
            .courses
            .get(course_id)
            .map(Course::credits)
            .ok_or_else(|| Error::CourseNotFound(course_id.clone()))?;
        let Some(student) = self.students.get_mut(student_id) else {
            return Err(Error::StudentNotFound(student_id.clone()));
        };
        if student.is_enrolled(course_id) {
            return Err(Error::AlreadyEnrolled {
                student: student_id.clone(),
                course: course_id.clone(),
            });
        }
        if student.has_completed(course_id) {
            return Err(Error::AlreadyCompleted {
                student: student_id.clone(),
                course: course_id.clone(),
            });
        }
        let total = student
            .credits()
            .checked_add(credits)
            .ok_or_else(|| Error::CreditOverflow(student_id.clone()))?;
        student.record_enrollment(course_id.clone(), total);
        Ok(())
    }

    /// Moves a course from a student's enrolled set to the completed set,
    /// releasing its credits.
    ///
    /// # Errors
    /// Fails if either id is unknown or the student is not enrolled in the
    /// course.
    pub fn complete(&mut self, student_id: &StudentId, course_id: &CourseId) -> Result<()> {
        let credits = self
            .courses
            .get(course_id)
            .map(Course::credits)
            .ok_or_else(|| Error::CourseNotFound(course_id.clone()))?;
        let Some(student) = self.students.get_mut(student_id) else {
            return Err(Error::StudentNotFound(student_id.clone()));
        };
        if !student.is_enrolled(course_id) {
            return Err(Error::NotEnrolled {
                student: student_id.clone(),
                course: course_id.clone(),
            });
        }
        let total = student.credits().saturating_sub(credits);
        student.record_completion(course_id, total);
        Ok(())
    }

    /// Removes a course from a student's enrolled set without marking it
    /// completed, releasing its credits.
    ///
    /// # Errors
    /// Fails if either id is unknown or the student is not enrolled in the
    /// course.
    pub fn drop_course(&mut self, student_id: &StudentId, course_id: &CourseId) -> Result<()> {
        let credits = self
            .courses
            .get(course_id)
            .map(Course::credits)
            .ok_or_else(|| Error::CourseNotFound(course_id.clone()))?;
        let Some(student) = self.students.get_mut(student_id) else {
            return Err(Error::StudentNotFound(student_id.clone()));
        };
        if !student.is_enrolled(course_id) {
            return Err(Error::NotEnrolled {
                student: student_id.clone(),
                course: course_id.clone(),
            });
        }
        let total = student.credits().saturating_sub(credits);
        student.record_drop(course_id, total);
        Ok(())
    }

    // =========================================================================
    // Faculty
    // =========================================================================

    /// Adds a faculty member.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateId`] if a faculty member with this id exists.
    pub fn add_faculty(&mut self, faculty: Faculty) -> Result<()> {
        if self.faculty.contains_key(faculty.id()) {
            return Err(Error::DuplicateId(faculty.id().to_string()));
        }
        self.faculty.insert(faculty.id().clone(), faculty);
        Ok(())
    }

    /// Looks up a faculty member by id.
    #[must_use]
    pub fn faculty(&self, id: &FacultyId) -> Option<&Faculty> {
        self.faculty.get(id)
    }

    /// Iterates all faculty in ascending id order.
    pub fn all_faculty(&self) -> impl Iterator<Item = &Faculty> {
        self.faculty.values()
    }

    /// Assigns a course to a faculty member, respecting the load ceiling.
    ///
    /// # Errors
    /// Fails if either id is unknown or the assignment would exceed the
    /// faculty member's maximum course load.
    pub fn assign(&mut self, faculty_id: &FacultyId, course_id: &CourseId) -> Result<()> {
        if !self.courses.contains_key(course_id) {
            return Err(Error::CourseNotFound(course_id.clone()));
        }
        let Some(faculty) = self.faculty.get_mut(faculty_id) else {
            return Err(Error::FacultyNotFound(faculty_id.clone()));
        };
        if !faculty.can_assign() {
            return Err(Error::CapacityExceeded(format!(
                "faculty {faculty_id} at maximum load of {}",
                faculty.max_courses()
            )));
        }
        faculty.record_assignment(course_id.clone());
        Ok(())
    }

    /// Removes a course assignment from a faculty member.
    ///
    /// # Errors
    /// Fails if the faculty id is unknown.
    pub fn unassign(&mut self, faculty_id: &FacultyId, course_id: &CourseId) -> Result<()> {
        let Some(faculty) = self.faculty.get_mut(faculty_id) else {
            return Err(Error::FacultyNotFound(faculty_id.clone()));
        };
        faculty.record_unassignment(course_id);
        Ok(())
    }

    // =========================================================================
    // Rooms and Labs
    // =========================================================================

    /// Adds a room.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateId`] if a room with this id exists.
    pub fn add_room(&mut self, room: Room) -> Result<()> {
        if self.rooms.contains_key(room.id()) {
            return Err(Error::DuplicateId(room.id().to_string()));
        }
        self.rooms.insert(room.id().clone(), room);
        Ok(())
    }

    /// Looks up a room by id.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Iterates all rooms in ascending id order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Adds a lab section.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateId`] if a lab with this id exists.
    pub fn add_lab(&mut self, lab: Lab) -> Result<()> {
        if self.labs.contains_key(lab.id()) {
            return Err(Error::DuplicateId(lab.id().to_string()));
        }
        self.labs.insert(lab.id().clone(), lab);
        Ok(())
    }

    /// Looks up a lab by id.
    #[must_use]
    pub fn lab(&self, id: &LabId) -> Option<&Lab> {
        self.labs.get(id)
    }

    /// Iterates all labs in ascending id order.
    pub fn labs(&self) -> impl Iterator<Item = &Lab> {
        self.labs.values()
    }

    /// Enrolls a student in a lab section, respecting its capacity.
    ///
    /// # Errors
    /// Fails if either id is unknown or the lab is full.
    pub fn enroll_in_lab(&mut self, lab_id: &LabId, student_id: &StudentId) -> Result<()> {
        if !self.students.contains_key(student_id) {
            return Err(Error::StudentNotFound(student_id.clone()));
        }
        let Some(lab) = self.labs.get_mut(lab_id) else {
            return Err(Error::LabNotFound(lab_id.clone()));
        };
        if !lab.has_space() {
            return Err(Error::CapacityExceeded(format!(
                "lab {lab_id} at capacity of {}",
                lab.capacity()
            )));
        }
        lab.record_enrollment(student_id.clone());
        Ok(())
    }

    /// Removes a student from a lab section.
    ///
    /// # Errors
    /// Fails if the lab id is unknown.
    pub fn remove_from_lab(&mut self, lab_id: &LabId, student_id: &StudentId) -> Result<()> {
        let Some(lab) = self.labs.get_mut(lab_id) else {
            return Err(Error::LabNotFound(lab_id.clone()));
        };
        lab.record_removal(student_id);
        Ok(())
    }
}
